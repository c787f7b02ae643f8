pub(crate) mod bounce;
pub(crate) mod combinator;
pub(crate) mod decay;
pub(crate) mod descriptor;
pub(crate) mod ease;
pub(crate) mod ops;
pub(crate) mod pause;
pub(crate) mod spring;
pub(crate) mod state;
pub(crate) mod timing;
