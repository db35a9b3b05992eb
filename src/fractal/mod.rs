pub(crate) mod subdivide;
