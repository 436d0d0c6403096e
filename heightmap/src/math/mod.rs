mod linspace;

pub(crate) use linspace::linspace;
