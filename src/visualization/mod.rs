pub mod view2d;
