/// Extracts the owned value from a `Cow`, falling back to the given default
/// when the cow is borrowed.
///
/// Helpful for functions returning `Cow<'_, str>` where `Cow::Borrowed`
/// marks "input unchanged": the caller can reuse the original owned string
/// instead of copying it.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
