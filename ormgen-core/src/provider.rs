//! Class names supplied by the model layer.

/// Answers which base class and interface a generated class uses.
///
/// The resolver only needs these two answers, not the model that computed
/// them, so tables, databases and test fakes can all stand in.
pub trait ClassNameProvider {
    /// Qualified name of the base class, or the configured default.
    fn base_class_name(&self) -> String;

    /// Qualified name of the interface the class implements, if any.
    fn interface_name(&self) -> Option<String>;
}

impl<T: ClassNameProvider + ?Sized> ClassNameProvider for &T {
    fn base_class_name(&self) -> String {
        (**self).base_class_name()
    }

    fn interface_name(&self) -> Option<String> {
        (**self).interface_name()
    }
}
