/// Exchange short codes as reported in `exchangeShortName`, with display names.
pub const EXCHANGES: &[(&str, &str)] = &[
    ("AMEX", "New York Stock Exchange Arca"),
    ("NASDAQ", "Nasdaq Global Select"),
    ("NYSE", "New York Stock Exchange"),
    ("ETF", "BATS Exchange"),
    ("OTC", "Other OTC"),
    ("MUTUAL_FUND", "Nasdaq Capital Market"),
    ("EURONEXT", "Euronext"),
    ("TSX", "Toronto"),
    ("MCX", "Multi Commodity Exchange of India"),
    ("XETRA", "Frankfurt Stock Exchange"),
    ("NSE", "National Stock Exchange of India"),
    ("LSE", "London Stock Exchange"),
    ("SIX", "SIX Swiss Exchange"),
    ("HKSE", "Hong Kong Stock Exchange"),
    ("OSE", "Osaka Exchange"),
    ("ASE", "Amman Stock Exchange"),
    ("BRU", "Brussels Stock Exchange"),
    ("JKT", "Jakarta Stock Exchange"),
    ("VIE", "Vienna Stock Exchange"),
    ("SGO", "Santiago Stock Exchange"),
    ("SHZ", "Shenzhen Stock Exchange"),
    ("SHH", "Shanghai Stock Exchange"),
    ("HAM", "Hamburg Stock Exchange"),
    ("CPH", "Copenhagen Stock Exchange"),
    ("ATH", "Athens Stock Exchange"),
    ("MIL", "Milan Stock Exchange"),
    ("JPX", "Japan Exchange"),
    ("KSE", "Karachi Stock Exchange"),
    ("KSC", "Karachi Stock Exchange"),
    ("KOE", "Korea Exchange"),
    ("STO", "Stockholm Stock Exchange"),
    ("IST", "Istanbul Exchange"),
    ("MEX", "Mexico Exchange"),
    ("JNB", "Johannesburg Stock Exchange"),
    ("LIS", "Euronext Lisbon"),
    ("TLV", "Tel Aviv Stock Exchange"),
    ("MCE", "Euronext"),
    ("WSE", "Warsaw Stock Exchange"),
    ("HEL", "Helsinki Stock Exchange"),
    ("SAO", "São Paulo Stock Exchange"),
    ("SET", "The Stock Exchange of Thailand"),
    ("IOB", "Indian Overseas Bank"),
];

/// Codes some listings use in place of the canonical ones.
const ALIASES: &[(&str, &str)] = &[("GER", "XETRA")];

/// Display name of an exchange short code, case-insensitive.
pub fn exchange_name(code: &str) -> Option<&'static str> {
    let code = code.to_ascii_uppercase();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map_or(code.as_str(), |(_, target)| *target);
    EXCHANGES
        .iter()
        .find(|(c, _)| *c == canonical)
        .map(|(_, name)| *name)
}
