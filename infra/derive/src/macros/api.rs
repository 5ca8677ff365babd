use super::error::derived_trait_names;
use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

/// Expands the `#[api_model]` attribute macro.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match try_expand_api_model(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand_api_model(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = ApiModelArgs::parse(args)?;
    let derives = derived_trait_names(&input.attrs);
    let serde_meta = SerdeMetaInfo::collect(&input.attrs)?;

    let derive_attr = derive_attr(&derives);
    let to_schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename_all =
        args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &serde_meta.rename_all {
        Some(existing) if existing.value() != rename_all.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
            ));
        },
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename_all)] },
    };

    let deny_unknown = args.deny_unknown_fields.unwrap_or(true);
    let deny_attr = match (serde_meta.deny_unknown_fields, deny_unknown) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        },
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #to_schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands the `#[api_handler]` attribute macro.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

impl ApiModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
        let mut parsed = Self { rename_all: None, deny_unknown_fields: None };

        for meta in metas {
            let Meta::NameValue(name_value) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "Expected name-value arguments like `rename_all = \"...\"`",
                ));
            };

            if name_value.path.is_ident("rename_all") {
                let Lit::Str(lit) = literal(&name_value, "rename_all must be a string literal")?
                else {
                    return Err(syn::Error::new_spanned(
                        &name_value.value,
                        "rename_all must be a string literal",
                    ));
                };
                set_once(&mut parsed.rename_all, &name_value, lit)?;
            } else if name_value.path.is_ident("deny_unknown_fields") {
                let Lit::Bool(lit) =
                    literal(&name_value, "deny_unknown_fields must be a boolean literal")?
                else {
                    return Err(syn::Error::new_spanned(
                        &name_value.value,
                        "deny_unknown_fields must be a boolean literal",
                    ));
                };
                set_once(&mut parsed.deny_unknown_fields, &name_value, lit.value)?;
            } else {
                return Err(syn::Error::new_spanned(
                    name_value.path,
                    "Unsupported argument; expected rename_all or deny_unknown_fields",
                ));
            }
        }

        Ok(parsed)
    }
}

fn literal(name_value: &MetaNameValue, message: &str) -> syn::Result<Lit> {
    match &name_value.value {
        Expr::Lit(expr_lit) => Ok(expr_lit.lit.clone()),
        other => Err(syn::Error::new_spanned(other, message)),
    }
}

fn set_once<T>(slot: &mut Option<T>, token: &MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

struct SerdeMetaInfo {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdeMetaInfo {
    fn collect(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut info = Self { rename_all: None, deny_unknown_fields: false };

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    info.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    info.deny_unknown_fields = true;
                } else if meta.input.peek(Token![=]) {
                    // Other container attributes are left to serde.
                    let _: Expr = meta.value()?.parse()?;
                }
                Ok(())
            })?;
        }

        Ok(info)
    }
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let tokens: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}
