pub mod inflector;
