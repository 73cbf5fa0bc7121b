mod component;
mod node;
mod page;
mod property;
mod replication;

pub use self::component::Component;
pub use self::node::{Node, NodeKind};
pub use self::page::Page;
pub use self::property::{Properties, PropertyValue};
pub use self::replication::{ReplicationAction, ReplicationStatus};
