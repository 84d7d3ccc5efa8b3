//! Macros for declaring validators with minimal boilerplate.

/// Declares a validator: the struct, its `Validate` impl, a constructor and
/// a factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; add extra derives with
/// `#[derive(...)]`.
///
/// Unit rule:
///
/// ```
/// use tessera_validator::validator;
/// use tessera_validator::foundation::{Validate, ValidationError};
///
/// validator! {
///     /// Rejects strings containing whitespace.
///     pub NoSpaces for str;
///     rule(input) { !input.contains(char::is_whitespace) }
///     error(input) { ValidationError::new("no_spaces", "must not contain spaces") }
///     fn no_spaces();
/// }
///
/// assert!(no_spaces().validate("joe").is_ok());
/// assert!(no_spaces().validate("joe doe").is_err());
/// ```
///
/// Rule with fields:
///
/// ```
/// use tessera_validator::validator;
/// use tessera_validator::foundation::{Validate, ValidationError};
///
/// validator! {
///     #[derive(Copy, PartialEq, Eq)]
///     pub AtMost { max: i64 } for i64;
///     rule(self, input) { *input <= self.max }
///     error(self, input) { ValidationError::new("at_most", format!("must be at most {}", self.max)) }
///     new(max: i64) { Self { max } }
///     fn at_most(max: i64);
/// }
///
/// assert!(at_most(3).validate(&3).is_ok());
/// assert!(at_most(3).validate(&4).is_err());
/// ```
#[macro_export]
macro_rules! validator {
    // Unit rule with factory fn.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &Self::Input,
            ) -> ::core::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // Rule with fields, explicit constructor and factory fn.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::core::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
