pub mod config_tree;
