//! Class-name joining.

/// Join the non-empty names with a single space.
///
/// `None` entries and empty strings are skipped; everything else is kept
/// verbatim, in order.
///
/// ```
/// use frame_budget::helpers::class_names;
///
/// assert_eq!(class_names(["btn", "", "btn-primary"]), "btn btn-primary");
/// assert_eq!(class_names([Some("a"), None, Some("b")]), "a b");
/// ```
pub fn class_names<'a, I, N>(names: I) -> String
where
    I: IntoIterator<Item = N>,
    N: Into<Option<&'a str>>,
{
    names
        .into_iter()
        .filter_map(Into::into)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join class names given as a mix of `&str` and `Option<&str>` arguments.
///
/// ```
/// use frame_budget::class_names;
///
/// let active: Option<&str> = None;
/// assert_eq!(class_names!("card", active, "", Some("wide")), "card wide");
/// ```
#[macro_export]
macro_rules! class_names {
    ($($name:expr),* $(,)?) => {
        $crate::helpers::class_names::<::std::vec::Vec<::core::option::Option<&str>>, _>(
            ::std::vec![$(::core::convert::Into::<::core::option::Option<&str>>::into($name)),*],
        )
    };
}
