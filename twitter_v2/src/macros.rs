/// Implements the credential accessor pair of [`Parameters`](crate::params::Parameters) for a
/// parameter object with a private `credential: Credential` field.
macro_rules! credential_accessors {
    () => {
        fn credential(&self) -> &str {
            self.credential.as_str()
        }

        fn set_credential(&mut self, credential: String) {
            self.credential = $crate::params::Credential::from(credential);
        }
    };
}

/// Generates consuming builder methods which replace a field-selection list with the given field
/// names. Each method has the same name as the field it sets.
macro_rules! field_list_setters {
    ($($field:ident),* $(,)?) => {
        $(
            #[inline]
            #[must_use]
            pub fn $field<I, S>(self, names: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<Box<str>>,
            {
                Self {
                    $field: names.into_iter().collect(),
                    ..self
                }
            }
        )*
    };
}
