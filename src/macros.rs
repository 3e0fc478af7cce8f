// src/macros.rs
#[macro_export]
macro_rules! s {
    // Owned String shorthand.

    // s!() → empty String
    () => {
        ::std::string::String::new()
    };
    // s!(x) → String::from(x); literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate two or more &str-like pieces into one String.
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
