#![warn(missing_docs)]

//! This crate contains the derive macro which lets a field-less enum be used as a named
//! argument in a disparser command schema.

extern crate proc_macro;

use proc_macro2::Literal;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields};

/// Implements `disparser::NamedEnum` for a field-less enum. Each variant is matched by the
/// snake_case form of its name, so `LightGray` is written as `light_gray` in a command.
#[proc_macro_derive(EnumArgument)]
pub fn derive_enum_argument(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let data_enum = match input.data {
        Data::Enum(data_enum) => data_enum,
        _ =>
            return Error::new_spanned(
                input.ident,
                "EnumArgument can only be derived on enums whose variants are field-less.",
            )
            .to_compile_error()
            .into(),
    };

    if data_enum.variants.is_empty() {
        return Error::new_spanned(input.ident, "EnumArgument requires at least one variant.")
            .to_compile_error()
            .into();
    }

    let mut variant_paths = Vec::new();
    let mut name_arms = Vec::new();
    for variant in &data_enum.variants {
        if !matches!(&variant.fields, Fields::Unit) {
            return Error::new_spanned(variant, "Variants cannot have fields.")
                .to_compile_error()
                .into();
        }

        let variant_name = &variant.ident;
        let arg_repr = Literal::string(&pascal_to_snake(&variant_name.to_string()));

        variant_paths.push(quote! { Self::#variant_name });
        name_arms.push(quote! {
            Self::#variant_name => #arg_repr
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    (quote! {
        impl #impl_generics ::disparser::NamedEnum for #ident #ty_generics #where_clause {
            const VARIANTS: &'static [Self] = &[#( #variant_paths ),*];

            fn name(&self) -> &'static str {
                match self {
                    #( #name_arms, )*
                }
            }
        }
    })
    .into()
}

// `HeavySnow` becomes `heavy_snow` and `UVIndex` becomes `uv_index`.
fn pascal_to_snake(pascal: &str) -> String {
    let chars = pascal.chars().collect::<Vec<_>>();
    let mut result = String::with_capacity(pascal.len() + 4);

    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && index > 0 {
            let previous = chars[index - 1];
            let next_is_lower = chars.get(index + 1).map_or(false, |next| next.is_lowercase());
            if !previous.is_uppercase() || next_is_lower {
                result.push('_');
            }
        }

        result.extend(ch.to_lowercase());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::pascal_to_snake;

    #[test]
    fn snake_names() {
        assert_eq!(pascal_to_snake("Red"), "red");
        assert_eq!(pascal_to_snake("LightGray"), "light_gray");
        assert_eq!(pascal_to_snake("UVIndex"), "uv_index");
        assert_eq!(pascal_to_snake("HttpOK"), "http_ok");
        assert_eq!(pascal_to_snake("Level2"), "level2");
    }
}
