/// Raw limit strings for one container. An empty string means the limit is unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceLimits {
    pub cpu: String,
    pub memory: String,
}

impl ResourceLimits {
    pub fn new(cpu: impl Into<String>, memory: impl Into<String>) -> ResourceLimits {
        return ResourceLimits { cpu: cpu.into(), memory: memory.into() };
    }

    pub fn is_unset(&self) -> bool {
        return self.cpu.is_empty() && self.memory.is_empty();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    XxxxLarge,
    Other,
}

pub const BUCKET_COUNT: usize = 8;

impl SizeBucket {
    pub const ALL: [SizeBucket; BUCKET_COUNT] = [
        SizeBucket::Small,
        SizeBucket::Medium,
        SizeBucket::Large,
        SizeBucket::XLarge,
        SizeBucket::XxLarge,
        SizeBucket::XxxLarge,
        SizeBucket::XxxxLarge,
        SizeBucket::Other,
    ];

    pub fn index(self) -> usize {
        return self as usize;
    }

    pub fn label(self) -> &'static str {
        return match self {
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
            SizeBucket::XLarge => "x-large",
            SizeBucket::XxLarge => "xx-large",
            SizeBucket::XxxLarge => "xxx-large",
            SizeBucket::XxxxLarge => "xxxx-large",
            SizeBucket::Other => "other",
        };
    }
}

/// Instance sizes from the capacity-planning catalog, as (cpu, memory) limit strings.
///
/// Lookups compare the limit strings exactly: "1.0" is not "1" and "8192Mi" is not "8Gi".
/// Anything missing from this table is [`SizeBucket::Other`].
pub const SIZE_CATALOG: [(&str, &str, SizeBucket); 7] = [
    ("1", "8Gi", SizeBucket::Small),
    ("2", "16Gi", SizeBucket::Medium),
    ("3", "24Gi", SizeBucket::Large),
    ("4", "32Gi", SizeBucket::XLarge),
    ("8", "64Gi", SizeBucket::XxLarge),
    ("16", "128Gi", SizeBucket::XxxLarge),
    ("32", "256Gi", SizeBucket::XxxxLarge),
];

pub fn classify(limits: &ResourceLimits) -> SizeBucket {
    return SIZE_CATALOG
        .iter()
        .find(|(cpu, memory, _)| limits.cpu == *cpu && limits.memory == *memory)
        .map(|(_, _, bucket)| *bucket)
        .unwrap_or(SizeBucket::Other);
}

#[cfg(test)]
mod test;
