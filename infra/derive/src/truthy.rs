use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{DeriveInput, GenericParam, Lifetime, LifetimeParam};

const BORROW_LIFETIME: &str = "'__tripwire";

pub fn expand(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let lifetime = Lifetime::new(BORROW_LIFETIME, Span::call_site());
    let mut borrowed = input.generics.clone();
    borrowed.params.insert(0, GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())));
    let (borrowed_impl_generics, _, _) = borrowed.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::tripwire::Truthy for #name #ty_generics #where_clause {
            #[inline]
            fn is_truthy(&self) -> bool {
                true
            }
        }

        #[automatically_derived]
        impl #impl_generics ::tripwire::Narrow for #name #ty_generics #where_clause {
            type Narrowed = Self;

            #[inline]
            fn narrow(self) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(self)
            }
        }

        #[automatically_derived]
        impl #borrowed_impl_generics ::tripwire::Narrow for &#lifetime #name #ty_generics #where_clause {
            type Narrowed = Self;

            #[inline]
            fn narrow(self) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{File, Item, Type, parse_quote};

    fn impls(input: &DeriveInput) -> Vec<syn::ItemImpl> {
        let file: File = syn::parse2(expand(input)).expect("expansion parses as items");
        file.items
            .into_iter()
            .map(|item| match item {
                Item::Impl(item) => item,
                other => panic!("unexpected item {}", quote!(#other)),
            })
            .collect()
    }

    fn trait_name(item: &syn::ItemImpl) -> String {
        let (_, path, _) = item.trait_.as_ref().expect("trait impl");
        path.segments.last().expect("trait path").ident.to_string()
    }

    #[test]
    fn emits_truthy_and_both_narrow_impls() {
        let items = impls(&parse_quote! { struct User { id: u32 } });

        assert_eq!(items.len(), 3);
        assert_eq!(trait_name(&items[0]), "Truthy");
        assert_eq!(trait_name(&items[1]), "Narrow");
        assert_eq!(trait_name(&items[2]), "Narrow");
        assert!(matches!(*items[2].self_ty, Type::Reference(_)));
    }

    #[test]
    fn keeps_generics_and_bounds() {
        let items = impls(&parse_quote! {
            enum Slot<T: Clone> where T: Send { Empty, Full(T) }
        });

        assert_eq!(items[0].generics.params.len(), 1);
        assert!(items[0].generics.where_clause.is_some());

        let borrowed = &items[2].generics;
        assert_eq!(borrowed.params.len(), 2);
        assert!(matches!(borrowed.params.first(), Some(GenericParam::Lifetime(_))));
    }
}
