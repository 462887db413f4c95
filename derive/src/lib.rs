use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod separators;

#[proc_macro_derive(Separators, attributes(separators))]
pub fn derive_separators(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match separators::expand_separators(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
