// Build an Option<BTreeMap<String, String>>, which is the shape k8s-openapi uses for labels,
// annotations, and node resource lists
#[macro_export]
macro_rules! klabel {
    ($($key:expr => $val:expr),+$(,)?) => {
        Some(std::collections::BTreeMap::from([$(($key.to_string(), $val.to_string())),+]))
    };
}

pub use klabel;
