pub mod emotions;
