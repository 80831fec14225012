use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, Fields, ItemStruct, Lit, MetaNameValue, Token};

struct MsgArgs {
    package: String,
    name: Option<String>,
}

pub fn expand_msg(args: TokenStream, input: ItemStruct) -> TokenStream {
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };

    if !matches!(input.fields, Fields::Named(_)) {
        return syn::Error::new_spanned(&input, "msg requires a struct with named fields")
            .to_compile_error();
    }

    let ident = &input.ident;
    let msg_name = args.name.unwrap_or_else(|| ident.to_string());
    let type_url = format!("/{}.{}", args.package, msg_name);

    quote! {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        #input

        impl ::dtc_domain::msg::Msg for #ident {
            const TYPE_URL: &'static str = #type_url;
        }
    }
}

fn parse_args(args: TokenStream) -> Result<MsgArgs, TokenStream> {
    let pairs = Punctuated::<MetaNameValue, Token![,]>::parse_terminated
        .parse2(args)
        .map_err(|err| err.to_compile_error())?;

    let mut package = None;
    let mut name = None;

    for pair in &pairs {
        let value = string_value(pair)?;
        if pair.path.is_ident("package") {
            package = Some(value);
        } else if pair.path.is_ident("name") {
            name = Some(value);
        } else {
            return Err(syn::Error::new_spanned(
                &pair.path,
                "unknown argument; expected `package` or `name`",
            )
            .to_compile_error());
        }
    }

    let Some(package) = package else {
        return Err(quote! { compile_error!("msg requires a `package = \"...\"` argument"); });
    };
    if package.is_empty() || package.split('.').any(|s| s.is_empty()) {
        return Err(quote! { compile_error!("msg `package` must be a dot-separated path"); });
    }

    Ok(MsgArgs { package, name })
}

fn string_value(pair: &MetaNameValue) -> Result<String, TokenStream> {
    if let Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) = &pair.value {
        Ok(s.value())
    } else {
        Err(syn::Error::new_spanned(&pair.value, "expected a string literal").to_compile_error())
    }
}
