//! Fixed rewrite tables for the conda-to-pip conversion.
//!
//! The tables encode which conda packages have no pip counterpart, which
//! ones install under a different name, and which requirement lines
//! belong to the CUDA wheel group. They are deliberately static: the
//! generated requirements files are pinned to the cu117 wheel index and
//! the pins only move together with that index.

/// Substrings identifying toolchain and native-runtime packages.
///
/// Matching is plain containment over the whole spec line, version and
/// build string included. The `lib` entry is broad on purpose and also
/// swallows anything merely carrying `lib` in its name; the generated
/// files were built with that behaviour and downstream environments
/// depend on it.
pub const DISALLOWED_SUBSTRINGS: &[&str] =
    &["_libgcc_mutex", "_openmp_mutex", "cuda-", "libcu", "lib"];

/// Conda-only packages dropped by exact name match.
pub const SKIP_NAMES: &[&str] = &[
    "binutils_impl_linux-64",
    "binutils_linux-64",
    "gcc_impl_linux-64",
    "gcc_linux-64",
    "gxx_impl_linux-64",
    "gxx_linux-64",
    "kernel-headers_linux-64",
    "ld_impl_linux-64",
    "libgcc-devel_linux-64",
    "libstdcxx-devel_linux-64",
    "sysroot_linux-64",
    "python_abi",
    "pytorch-mutex",
    "blas",
    "mkl",
    "mkl-service",
    "mkl_fft",
    "mkl_random",
    "intel-openmp",
    "tbb",
];

/// Certificate and TLS packages managed by the system, never by pip.
pub const CERT_NAMES: &[&str] = &["ca-certificates", "certifi", "openssl"];

/// A conda package that installs under a different pip name.
struct RenameDef {
    conda: &'static str,
    pip: &'static str,
}

/// Renames applied by conda package name.
///
/// The replacement is the full requirement line, so the torch family
/// comes out pinned to the cu117 wheels regardless of the version the
/// environment file carried, and the identity entries come out bare
/// with their conda version stripped.
const RENAME_DEFS: &[RenameDef] = &[
    RenameDef {
        conda: "pytorch",
        pip: "torch==2.0.1+cu117",
    },
    RenameDef {
        conda: "torchvision",
        pip: "torchvision==0.15.2+cu117",
    },
    RenameDef {
        conda: "torchaudio",
        pip: "torchaudio==2.0.2+cu117",
    },
    RenameDef {
        conda: "opencv-python",
        pip: "opencv-python",
    },
    RenameDef {
        conda: "python-dateutil",
        pip: "python-dateutil",
    },
    RenameDef {
        conda: "python-fastjsonschema",
        pip: "jsonschema",
    },
    RenameDef {
        conda: "python-kaleido",
        pip: "kaleido",
    },
    RenameDef {
        conda: "python-fcl",
        pip: "python-fcl",
    },
];

/// Markers that route a requirement line into the CUDA wheel group.
///
/// Containment again, so the markers match wherever the `name==` pair
/// appears in the line.
pub const GPU_MARKERS: &[&str] = &["torch==", "torchvision==", "torchaudio=="];

/// Extra index serving the cu117 torch wheels.
pub const EXTRA_INDEX_URL: &str = "--extra-index-url https://download.pytorch.org/whl/cu117";

/// True when the spec line contains any disallowed substring.
pub fn is_disallowed(spec: &str) -> bool {
    DISALLOWED_SUBSTRINGS
        .iter()
        .any(|needle| spec.contains(needle))
}

/// True when the package name is on the exact-match skip list.
pub fn is_skipped_name(name: &str) -> bool {
    SKIP_NAMES.contains(&name)
}

/// True when the package is a system certificate store.
pub fn is_cert_name(name: &str) -> bool {
    CERT_NAMES.contains(&name)
}

/// Looks up the replacement requirement line for a renamed package.
pub fn rename_for(name: &str) -> Option<&'static str> {
    RENAME_DEFS
        .iter()
        .find(|def| def.conda == name)
        .map(|def| def.pip)
}

/// True when the requirement line belongs in the CUDA wheel group.
pub fn is_gpu_line(line: &str) -> bool {
    GPU_MARKERS.iter().any(|marker| line.contains(marker))
}
