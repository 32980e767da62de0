mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `dx-error` for the given struct.
///
/// The information of the error is given with the `error` attribute:
/// ```ignore
/// use dx_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("cannot divide `{}` by zero", numerator),
///     labels = ["this divisor is zero"],
///     help = "remove the division, or divide by something else",
/// )]
/// pub struct Foo {
///     pub numerator: String,
/// }
/// ```
///
/// | Tag       | Description                                                                      |
/// | --------- | -------------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the report, and by `Display` on the error.  |
/// | `labels`  | An iterable of label texts; the `n`-th label is attached to the `n`-th span.     |
/// | `help`    | Optional help text describing what the user can do to fix the error.            |
///
/// `message` is required. Each tag accepts an expression; for structs with named fields, the
/// fields are in scope (as references) while the expression is evaluated. Tuple structs are not
/// supported.
///
/// The crate using the derive must depend on `ariadne` and `dx-error`.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::dx_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #target
        }
    }.into()
}
