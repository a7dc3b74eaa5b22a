//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{ToTokens, quote};
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Error, Expr, Item, LitInt, LitStr, Result, Type, parse_macro_input};

/// Implements `aoc_framework::runner::SolutionRunner` for the annotated struct or impl block.
///
/// The generated `run` parses the input when `parsed` is given, then solves part one and, when
/// `part_two` is given, part two, through the matching `aoc_framework::runner::solve_*` function.
///
/// # Properties
///
/// - `name`: an expression evaluating to `&str`, the name reported to the output handler.
/// - `day`: a day number; shorthand for `name = "Day N"`. Exactly one of `name` and `day` is
///   required.
/// - `part_one` (required): the type implementing `Solution<PartOne>`.
/// - `part_two`: the type implementing `Solution<PartTwo>`.
/// - `parsed`: a `ParseData` type both parts take as input. Without it, parts take `str`.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(day = 1, part_one = Day01)]
/// struct Day01Runner;
///
/// #[solution_runner(day = 2, part_one = Day02Part1, part_two = Day02Part2)]
/// impl AdventOfCode2025<2> {}
///
/// const NAME: &str = "Day 3: Lobby";
/// #[solution_runner(name = NAME, parsed = Banks, part_one = Day03, part_two = Day03)]
/// struct Day03;
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = Properties::default();
    let parser = syn::meta::parser(|meta| properties.parse(&meta));
    parse_macro_input!(args with parser);

    let item = parse_macro_input!(input as Item);
    match expand(properties, &item) {
        Ok(runner) => quote! {
            #item
            #runner
        }
        .into(),
        Err(error) => {
            let error = error.to_compile_error();
            quote! {
                #item
                #error
            }
            .into()
        }
    }
}

#[derive(Default)]
struct Properties {
    name: Option<Expr>,
    day: Option<LitInt>,
    parsed: Option<Type>,
    part_one: Option<Type>,
    part_two: Option<Type>,
}

impl Properties {
    fn parse(&mut self, meta: &ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("name") {
            set_once(&mut self.name, meta, "name")
        } else if meta.path.is_ident("day") {
            set_once(&mut self.day, meta, "day")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut self.parsed, meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    }

    fn name(&self) -> Result<proc_macro2::TokenStream> {
        match (&self.name, &self.day) {
            (Some(name), None) => Ok(name.to_token_stream()),
            (None, Some(day)) => {
                let day_number: u8 = day.base10_parse()?;
                Ok(LitStr::new(&format!("Day {day_number}"), day.span()).to_token_stream())
            }
            (Some(_), Some(day)) => Err(Error::new(
                day.span(),
                "'name' and 'day' cannot both be set",
            )),
            (None, None) => Err(Error::new(
                Span::call_site(),
                "missing required property: 'name' or 'day'",
            )),
        }
    }
}

fn set_once<T: Parse>(slot: &mut Option<T>, meta: &ParseNestedMeta, key: &str) -> Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

fn expand(properties: Properties, item: &Item) -> Result<proc_macro2::TokenStream> {
    let self_ty = match item {
        Item::Struct(item) => item.ident.to_token_stream(),
        Item::Impl(item) => item.self_ty.to_token_stream(),
        _ => {
            return Err(Error::new(
                Span::call_site(),
                "#[solution_runner] can only be applied to a struct or an impl block",
            ));
        }
    };

    let name = properties.name()?;
    let Some(part_one) = properties.part_one else {
        return Err(Error::new(
            Span::call_site(),
            "missing required property: 'part_one'",
        ));
    };

    let solve = match (properties.parsed, properties.part_two) {
        (None, None) => quote! {
            aoc_framework::runner::solve_half_solution::<#part_one>
        },
        (None, Some(part_two)) => quote! {
            aoc_framework::runner::solve_full_solution::<#part_one, #part_two>
        },
        (Some(parsed), None) => quote! {
            aoc_framework::runner::solve_parsed_half_solution::<#parsed, #part_one>
        },
        (Some(parsed), Some(part_two)) => quote! {
            aoc_framework::runner::solve_parsed_full_solution::<#parsed, #part_one, #part_two>
        },
    };

    Ok(quote! {
        impl aoc_framework::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool,
            ) -> aoc_framework::DynamicResult<()> {
                #solve(#name, input, handler, timed)
            }
        }
    })
}
