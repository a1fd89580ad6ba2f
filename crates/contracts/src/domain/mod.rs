pub mod a001_node;
