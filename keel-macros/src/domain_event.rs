use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, LitStr, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[domain_event] 宏实现
/// - 支持结构体与枚举
/// - 合并/追加默认派生：Debug, Clone
/// - 生成 `::keel_domain::domain_event::DomainEvent` 实现，`event_name()` 返回稳定名称
/// - 支持：`#[domain_event(name = "...")]`，默认使用类型标识符
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let (attrs, ident, generics) = match &mut input {
        Item::Struct(s) => (&mut s.attrs, s.ident.clone(), s.generics.clone()),
        Item::Enum(e) => (&mut e.attrs, e.ident.clone(), e.generics.clone()),
        other => {
            return syn::Error::new(
                other.span(),
                "#[domain_event] can only be used on struct or enum types",
            )
            .to_compile_error()
            .into();
        }
    };

    let required: Vec<syn::Path> = vec![syn::parse_quote!(Debug), syn::parse_quote!(Clone)];
    apply_derives(attrs, required);

    let name = cfg
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let out = quote! {
        #input

        impl #impl_generics ::keel_domain::domain_event::DomainEvent for #ident #ty_generics #where_clause {
            fn event_name() -> &'static str { #name }
        }
    };

    TokenStream::from(out)
}

// 解析 domain_event 宏参数：name = "<literal>"
struct EventAttrConfig {
    name: Option<LitStr>,
}

impl Parse for EventAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self { name: None });
        }

        let key: syn::Ident = input.parse()?;
        if key != "name" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'name'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let name: LitStr = input.parse()?;
        if name.value().is_empty() {
            return Err(syn::Error::new(name.span(), "event name must not be empty"));
        }
        if !input.is_empty() {
            let _comma: Token![,] = input.parse()?;
        }

        Ok(Self { name: Some(name) })
    }
}
