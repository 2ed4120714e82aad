use crate::api::models::PoolDescriptor;
use clap::Args;

/// Unified way of specifying a Pool
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct PoolSpecifier {
    /// Pool-ID
    #[arg(short, long = "pool")]
    pub pool_name: Option<String>,
    /// Buckets directory of the pool
    #[arg(short, long)]
    pub directory: Option<String>,
}

impl PoolSpecifier {
    /// Create a new PoolSpecifier with a Pool-ID
    pub fn with_name(name: &str) -> Self {
        Self {
            pool_name: Some(name.to_string()),
            directory: None,
        }
    }

    /// Create a new PoolSpecifier with a buckets directory
    pub fn with_directory(directory: &str) -> Self {
        Self {
            pool_name: None,
            directory: Some(directory.to_string()),
        }
    }

    /// Position of the specified pool in a pool list
    pub fn find(&self, pools: &[PoolDescriptor]) -> Option<usize> {
        pools.iter().position(|desc| {
            self.pool_name.as_deref() == Some(desc.pool_name.as_str())
                || self
                    .directory
                    .as_deref()
                    .map(|d| d.trim_end_matches('/'))
                    == Some(desc.buckets_directory.trim_end_matches('/'))
        })
    }
}

impl std::fmt::Display for PoolSpecifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.pool_name, &self.directory) {
            (Some(name), _) => write!(f, "pool {name}"),
            (None, Some(directory)) => write!(f, "directory {directory}"),
            (None, None) => f.write_str("nothing"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::PoolSpecifier;
    use crate::api::models::pool::test::pool;

    #[test]
    fn find_by_name_or_directory() {
        let pools = vec![pool("p1"), pool("p2")];
        assert_eq!(PoolSpecifier::with_name("p2").find(&pools), Some(1));
        assert_eq!(PoolSpecifier::with_directory("/home/alice/p1/").find(&pools), Some(0));
        assert_eq!(PoolSpecifier::with_name("p3").find(&pools), None);
    }
}
