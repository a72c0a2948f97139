//! Record selection from TXT record collections.

/// Returns the first TXT record that starts with `prefix`.
///
/// The match is exact and case-sensitive, with no whitespace trimming:
/// `spf1 include:_spf.example.com` is not an SPF record, and neither is
/// `V=SPF1 -all`.
///
/// # Arguments
///
/// * `txt_records` - TXT record strings as returned by the resolver
/// * `prefix` - Version tag the record must begin with (e.g. `v=spf1`)
pub fn find_record_with_prefix<'a>(txt_records: &'a [String], prefix: &str) -> Option<&'a str> {
    txt_records
        .iter()
        .map(String::as_str)
        .find(|txt| txt.starts_with(prefix))
}
