use std::fmt;

/// The seven retrieval sources, declared in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Copernicus,
    Eprel,
    Inria,
    Irf,
    Nasa,
    Wikimedia,
    Wikipedia,
}

impl SourceKind {
    /// Fixed order in which the coordinator runs sources.
    pub const RUN_ORDER: [SourceKind; 7] = [
        SourceKind::Copernicus,
        SourceKind::Eprel,
        SourceKind::Inria,
        SourceKind::Irf,
        SourceKind::Nasa,
        SourceKind::Wikimedia,
        SourceKind::Wikipedia,
    ];

    /// Directory name under the output root, also used as the log tag.
    pub fn slug(self) -> &'static str {
        match self {
            SourceKind::Copernicus => "copernicus",
            SourceKind::Eprel => "eprel",
            SourceKind::Inria => "inria",
            SourceKind::Irf => "irf",
            SourceKind::Nasa => "nasa",
            SourceKind::Wikimedia => "wikimedia",
            SourceKind::Wikipedia => "wikipedia",
        }
    }

    pub fn toggle_var(self) -> &'static str {
        match self {
            SourceKind::Copernicus => "RUN_COPERNICUS",
            SourceKind::Eprel => "RUN_EPREL",
            SourceKind::Inria => "RUN_INRIA",
            SourceKind::Irf => "RUN_IRF",
            SourceKind::Nasa => "RUN_NASA",
            SourceKind::Wikimedia => "RUN_WIKIMEDIA",
            SourceKind::Wikipedia => "RUN_WIKIPEDIA_IMAGES",
        }
    }

    pub fn cap_var(self) -> &'static str {
        match self {
            SourceKind::Copernicus => "MAX_COPERNICUS_IMAGES",
            SourceKind::Eprel => "MAX_EPREL_IMAGES",
            SourceKind::Inria => "MAX_INRIA_IMAGES",
            SourceKind::Irf => "MAX_IRF_IMAGES",
            SourceKind::Nasa => "MAX_NASA_IMAGES",
            SourceKind::Wikimedia => "MAX_WIKIMEDIA_IMAGES",
            SourceKind::Wikipedia => "MAX_WIKIPEDIA_IMAGES",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Static facts about a source that end up in every sidecar it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub kind: SourceKind,
    pub document_type: String,
    pub provider: String,
    pub repository: String,
}

impl SourceDescriptor {
    pub fn new(
        kind: SourceKind,
        document_type: impl Into<String>,
        provider: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            document_type: document_type.into(),
            provider: provider.into(),
            repository: repository.into(),
        }
    }
}
