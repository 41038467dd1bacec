use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Read the column name for a field, either from a `#[column = "..."]`
/// attribute or from the field name itself.
fn column_name(field: &syn::Field) -> Result<String, syn::Error> {
    for attr in &field.attrs {
        if !attr.path().is_ident("column") {
            continue;
        }

        if let syn::Meta::NameValue(nv) = &attr.meta {
            if let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(s),
                ..
            }) = &nv.value
            {
                return Ok(s.value());
            }
        }

        return Err(syn::Error::new_spanned(
            attr,
            "expected a column name, e.g. #[column = \"X\"]",
        ));
    }

    Ok(field
        .ident
        .as_ref()
        .map(|i| i.to_string())
        .unwrap_or_default())
}

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.is_empty() {
        return quote! {
            compile_error!("Models must have named fields, one for each coordinate column.")
        }
        .into();
    }

    let mut field_names = vec![];
    let mut columns = vec![];
    for field in input.fields.iter() {
        match column_name(field) {
            Ok(column) => columns.push(column),
            Err(err) => return err.to_compile_error().into(),
        }
        field_names.push(field.ident.clone());
    }
    let len = field_names.len();

    // Make sure the fields are public and strip our own attributes.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
        f.attrs.retain(|a| !a.path().is_ident("column"));
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new point from its coordinates.
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#field_names: crate::space::Component),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the coordinates in column order.
            pub fn to_array(&self) -> [crate::space::Component; #len] {
                [#(self.#field_names),*]
            }
        }

        impl crate::models::Model for #struct_name {
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];

            fn from_row(
                row: &crate::models::Row,
                index: usize,
            ) -> crate::error::PlotResult<Self> {
                let space = <Self as crate::space::HasSpace>::SPACE;
                Ok(Self::new(
                    #(crate::models::column(row, space, #columns, index)?),*
                ))
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
