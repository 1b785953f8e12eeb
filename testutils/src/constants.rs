pub const TEST_NODE_NAME: &str = "the-node";
pub const TEST_MISSING_NODE_NAME: &str = "missing-node";
pub const TEST_NODE_UID: &str = "1234-asdf";
pub const TEST_NODE_POD_CIDR: &str = "10.244.3.0/24";
pub const TEST_NODE_TAINT_KEY: &str = "dedicated";
pub const TEST_NODE_LABEL_KEY: &str = "kubernetes.io/hostname";
pub const TEST_NOW: i64 = 15;
