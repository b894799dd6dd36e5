//! Classification of outliers
//!
//! WARNING: There's no formal/mathematical definition of what an outlier actually is. Therefore,
//! all outlier classifiers are *subjective*. Tukey's fences are the *de facto* standard for
//! exploratory work and the only classifier provided here.

pub mod tukey;
