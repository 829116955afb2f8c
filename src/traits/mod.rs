pub mod fragment;

pub use fragment::FragmentSource;
