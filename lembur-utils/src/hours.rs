/// Reads the hour count out of a free text hours field such as `"3 Jam"`.
///
/// The first run of ASCII digits wins, anything around it is ignored. A field
/// without digits (including the empty one) counts as zero hours. Digit runs
/// which do not fit into an `i64` saturate at `i64::MAX`.
pub fn parse_hours(hours_field: &str) -> i64 {
    hours_field
        .bytes()
        .skip_while(|byte| !byte.is_ascii_digit())
        .take_while(|byte| byte.is_ascii_digit())
        .fold(0i64, |hours, digit| {
            hours
                .saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        })
}
