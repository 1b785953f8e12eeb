// Discriminating label applied to every fixture; flush selects on exactly this pair
pub const FIXTURE_LABEL_KEY: &str = "app";
pub const FIXTURE_LABEL_VALUE: &str = "kubetest";

// Naming
pub const FIXTURE_NAME_PREFIX: &str = "kubetest";
pub const NODE_FIXTURE_KIND: &str = "node";
pub const NAME_SUFFIX_LEN: usize = 8;

// Same alphabet the apiserver uses for generateName: lowercase, no vowels, no
// easily-confused digits
pub const NAME_SUFFIX_ALPHABET: &[u8] = b"bcdfghjklmnpqrstvwxz2456789";

// Well-known taints
pub const TAINT_NODE_UNREACHABLE_KEY: &str = "node.kubernetes.io/unreachable";
pub const TAINT_EFFECT_NO_SCHEDULE: &str = "NoSchedule";
pub const TAINT_EFFECT_NO_EXECUTE: &str = "NoExecute";

// Node condition kinds
pub const NODE_MEMORY_PRESSURE: &str = "MemoryPressure";
pub const NODE_DISK_PRESSURE: &str = "DiskPressure";
pub const NODE_PID_PRESSURE: &str = "PIDPressure";
pub const NODE_READY: &str = "Ready";

pub const CONDITION_TRUE: &str = "True";
pub const CONDITION_FALSE: &str = "False";

// Default template values
pub const DEFAULT_POD_CIDR: &str = "10.0.0.0/24";
pub const DEFAULT_NODE_CPU: &str = "4";
pub const DEFAULT_NODE_MEMORY: &str = "16Gi";
pub const DEFAULT_NODE_PODS: &str = "110";
