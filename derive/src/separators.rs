use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, LitStr, Result};

pub(crate) fn expand_separators(input: &DeriveInput) -> Result<TokenStream> {
    let mut classes = Vec::new();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("separators")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("whitespace") {
                classes.push(Class::Whitespace);
            } else if meta.path.is_ident("non_hex") {
                classes.push(Class::NonHex);
            } else if meta.path.is_ident("chars") {
                let chars: LitStr = meta.value()?.parse()?;

                if chars.value().is_empty() {
                    Err(Error::new(chars.span(), "`chars` must not be empty."))?
                }

                classes.push(Class::Chars(chars));
            } else {
                Err(meta.error("Expected `whitespace`, `non_hex`, or `chars = \"...\"`."))?
            }

            Ok(())
        })?;
    }

    if classes.is_empty() {
        Err(Error::new_spanned(
            input,
            "`Separators` requires a `#[separators(...)]` attribute listing at least one class.",
        ))?
    }

    let tests = classes.iter().map(|class| match class {
        Class::Whitespace => quote! { c.is_whitespace() },
        Class::NonHex => quote! { ::hexcodec::sans::digit::value_of(c).is_none() },
        Class::Chars(chars) => {
            let chars = chars.value().chars().collect::<Vec<_>>();
            quote! { matches!(c, #(#chars)|*) }
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::hexcodec::sans::strategy::DecodeStrategy for #name #ty_generics #where_clause {
            fn should_ignore(&mut self, c: char, _: ::hexcodec::sans::position::Position) -> bool {
                #(#tests)||*
            }
        }

        impl #impl_generics ::hexcodec::avec::HexDecoder for #name #ty_generics #where_clause {
            type Strategy<'strategy> = Self where Self: 'strategy;

            fn strategy(&self) -> Self {
                ::core::clone::Clone::clone(self)
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
enum Class {
    Whitespace,
    NonHex,
    Chars(LitStr),
}
