#[macro_export]
///Integer ceil division: ceil(a/b), e.g. words needed to cover a byte length
macro_rules! ceil_div {
    ($numerator:expr, $denominator:expr) => {
        ($numerator + $denominator - 1) / $denominator
    };
}
