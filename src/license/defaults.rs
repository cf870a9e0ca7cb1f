/// License identifiers treated as open source when no configuration overrides them.
///
/// Matching is exact and case-sensitive, so every spelling found in package
/// metadata has to be listed on its own (`GPL2` and `GPLv2` are different
/// identifiers). Extend it through `extra_open_source` in the config file.
pub const DEFAULT_OPEN_SOURCE: &[&str] = &[
    // GNU family, pacman spellings
    "GPL",
    "GPL2",
    "GPLv2",
    "GPL3",
    "GPLv3",
    "LGPL",
    "LGPL2",
    "LGPL2.1",
    "LGPL3",
    "AGPL",
    "AGPL3",
    // GNU family, SPDX spellings
    "GPL-2.0-only",
    "GPL-2.0-or-later",
    "GPL-3.0-only",
    "GPL-3.0-or-later",
    "LGPL-2.0-only",
    "LGPL-2.0-or-later",
    "LGPL-2.1-only",
    "LGPL-2.1-or-later",
    "LGPL-3.0-only",
    "LGPL-3.0-or-later",
    "AGPL-3.0-only",
    "AGPL-3.0-or-later",
    // Permissive
    "MIT",
    "BSD",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "Apache",
    "APACHE",
    "Apache-2.0",
    "ISC",
    "ZLIB",
    "Zlib",
    // Other copyleft
    "MPL",
    "MPL2",
    "MPL-2.0",
    "PerlArtistic",
    "Artistic2.0",
    "Artistic-2.0",
];
