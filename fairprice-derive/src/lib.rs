use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, LitStr, Meta, Type};

/// Derive macro describing the columns of a CSV input record.
///
/// For each named field it records:
/// - the column name (`#[serde(rename = "...")]` wins over the field name)
/// - whether the column is required
/// - the field's doc comment as its description
///
/// A column is required unless its type is `Option<T>`. Fields that are
/// `Option<T>` only so that a blank cell can be reported as a validation error
/// can be marked `#[csv(required)]`.
///
/// Generates `csv_schema() -> &'static [CsvField]` and
/// `csv_header() -> Vec<&'static str>`. `CsvField` must be in scope.
#[proc_macro_derive(CsvSchema, attributes(serde, csv))]
pub fn derive_csv_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "CsvSchema requires named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "CsvSchema only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let mut columns = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let column = serde_rename(&field.attrs).unwrap_or_else(|| ident.to_string());
        let required = !is_option(&field.ty) || csv_required(&field.attrs);
        let description = doc_comment(&field.attrs);
        columns.push((column, required, description));
    }

    let entries = columns.iter().map(|(column, required, description)| {
        quote! {
            CsvField {
                name: #column,
                required: #required,
                description: #description,
            }
        }
    });
    let names = columns.iter().map(|(column, _, _)| column);

    let expanded = quote! {
        impl #name {
            pub fn csv_schema() -> &'static [CsvField] {
                static SCHEMA: &[CsvField] = &[
                    #(#entries),*
                ];
                SCHEMA
            }

            pub fn csv_header() -> Vec<&'static str> {
                vec![#(#names),*]
            }
        }
    };

    TokenStream::from(expanded)
}

fn serde_rename(attrs: &[Attribute]) -> Option<String> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        // other serde options are skipped, including their values
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }
    rename
}

fn csv_required(attrs: &[Attribute]) -> bool {
    let mut required = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("csv")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                required = true;
            }
            Ok(())
        });
    }
    required
}

fn doc_comment(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
