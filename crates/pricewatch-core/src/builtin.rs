//! # Built-In Currency Table
//!
//! The compiled-in catalog: 112 currencies in curated order. The most
//! frequent currencies go first (match early!); ordering is load-bearing
//! because free-text matching is first-match-wins.
//!
//! The table is effectively configuration that ships with the binary. It is
//! not user-editable at runtime; deployments that need a different table
//! load one through [`Catalog::from_specs`] instead.

use std::sync::LazyLock;

use crate::catalog::{Catalog, CatalogBuilder};
use crate::currency::CurrencySpec;
use crate::error::CatalogResult;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    // The table below is validated by the conflict registry on every build
    // and covered by tests; a failure here is a programming error in the
    // table itself and must abort startup.
    build_builtin().expect("built-in currency table is conflict-free")
});

impl Catalog {
    /// The process-wide built-in catalog, built on first use.
    ///
    /// Building a second catalog via [`CatalogBuilder`] is legal and
    /// deterministic; this static merely avoids recompiling ~112 regexes
    /// per call site.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }
}

fn build_builtin() -> CatalogResult<Catalog> {
    let mut builder = CatalogBuilder::new();
    for spec in builtin_specs() {
        builder.currency(spec)?;
    }

    // Extra code-index aliases: map non-canonical codes seen in scraped
    // feeds onto catalog entries without adding match tokens.
    builder.code_alias("РУБ", "RUB")?;

    Ok(builder.build())
}

#[rustfmt::skip]
fn builtin_specs() -> Vec<CurrencySpec> {
    use crate::currency::CurrencySpec as C;
    vec![
        // Most important/frequent currencies go first (match early!)
        C::new("EUR").symbol("€").decimal(',').grouping('.').succeeds()
            .aliases(["&euro;"]).label("Euro"),
        // "$" needs context: it must not match the trailing dollar of "R$".
        C::new("USD").symbol("$").match_pattern(r"USD|(([^R]|^)\$)")
            .label("US Dollar").separator(""),
        C::new("GBP").symbol("£").aliases(["&pound;"]).label("British Pound").separator(""),
        C::new("BRL").symbol("R$").decimal(',').grouping('.').label("Brasilian Real"),
        C::new("PLN").symbol("zł").decimal(',').grouping(' ').label("Polish Złoty")
            .separator(" ").succeeds(),
        C::new("RUB").symbol("руб.").decimal(',').grouping(' ').places(0).succeeds()
            .label("Russian Rubel").aliases(["₽", "руб"]),
        C::new("UAH").symbol("грн.").decimal(',').grouping(' ').places(0).succeeds()
            .label("Ukrainian Hryvnia").aliases(["грн"]),
        C::new("AUD").symbol("$").no_symbol_match().label("Australian Dollar").separator(""),
        C::new("CAD").symbol("CDN$").match_pattern(r"CAD|C\s*\$|CND|CDN\s*\$")
            .label("Canadian Dollar"),
        C::new("INR").symbol("₹").places(0).aliases(["RS."]).label("Indian Rupee").separator(""),
        C::new("CHF").symbol("CHF").decimal(',').grouping('.').aliases(["FR"])
            .label("Frances").succeeds(),
        C::new("CZK").symbol("Kč").decimal(',').grouping(' ').label("Czeck Koruna"),
        C::new("DKK").symbol("kr.").decimal(',').grouping('.').places(0).label("Danish Krona"),
        C::new("SEK").symbol("kr").decimal(',').grouping(' ').places(0).succeeds()
            .label("Swedish Krona"),
        C::new("HUF").symbol("Ft").label("Hungarian Forint"),
        C::new("MXN").symbol("Mex$").label("Mexican Peso"),
        C::new("NOK").symbol("kr").decimal(',').grouping('.').places(0).succeeds()
            .no_symbol_match().label("Norwegian Krown"),
        C::new("TRY").symbol("₺").decimal(',').grouping('.').succeeds().aliases(["TL"])
            .label("New Turkish Lira").separator(""),
        C::new("RON").symbol("lei").decimal(',').grouping('.').succeeds().label("Rumanian Leu"),
        C::new("RSD").symbol("РСД").decimal(',').grouping('.').label("Serbian Dinar"),
        // Exotic / Lower priority
        C::new("AED").symbol("ﺩ.ﺇ.").decimal('٫').grouping('٬').label("UAE Dirham"),
        C::new("AOA").symbol("Kz").label("Angolan Kwanza"),
        C::new("ANG").symbol("ƒ").decimal('٫').grouping(' ').label("Dutch Guilder"),
        C::new("ALL").symbol("ALL").succeeds().label("Albanian Lek"),
        C::new("AMD").symbol("֏").label("Armenian Dram"),
        C::new("ARS").symbol("$").decimal(',').grouping('.').no_symbol_match()
            .label("Argentine Peso"),
        C::new("AWG").symbol("Afl.").decimal(',').grouping(' ').label("Aruban florin"),
        C::new("AZN").symbol("ман").label("Azerbaijani New Manat"),
        C::new("BAM").symbol("KM").decimal(',').grouping('.').label("Bosnian Mark"),
        C::new("BBD").symbol("$").no_symbol_match().label("Barbadian Dollar").separator(""),
        C::new("BDT").symbol("Tk").label("Bangladeshi Taka"),
        C::new("BGN").symbol("лв.").decimal(',').grouping('.').label("Bulgarian Lev"),
        C::new("BHD").symbol(".ﺩ.ﺏ").decimal('٫').grouping('٬').places(3)
            .label("Bahraini Dinar"),
        C::new("BND").symbol("$").no_symbol_match().label("Bruneian Dollar").separator(""),
        C::new("BOB").symbol("$b").decimal(',').grouping(' ').label("Bolivian Bolíviano"),
        C::new("BSD").symbol("$").no_symbol_match().label("Bahamian Dollar").separator(""),
        C::new("BYN").symbol("Br").label("Belarusian Ruble"),
        C::new("BZD").symbol("BZ$").label("Belizean Dollar"),
        C::new("BIF").symbol("FBu").label("Burundian Franc"),
        C::new("CLP").symbol("$").decimal(',').grouping('.').places(0).no_symbol_match()
            .label("Chilean Peso").separator(""),
        C::new("CLF").symbol("UF").decimal(',').grouping('.').places(0).no_symbol_match()
            .label("Unidad de Fomento").separator(""),
        C::new("CNY").symbol("￥").no_symbol_match().aliases(["元", "圆"])
            .label("Chinese Renminbi"),
        C::new("COP").symbol("$").decimal(',').grouping('.').no_symbol_match()
            .label("Columbian Peso").separator("").aliases(["COU"]),
        C::new("CRC").symbol("₡").decimal(',').grouping('.').label("Costa Rican Colón"),
        C::new("CUP").symbol("₱").no_symbol_match().aliases(["$", "$MN"]).label("Cuban Peso"),
        C::new("DOP").symbol("RD$").decimal(',').grouping('.').no_symbol_match()
            .label("Dominican Peso"),
        C::new("DZD").symbol("ﺪﺟ").decimal(',').grouping('.').places(0).aliases(["ﺩ.ﺝ."])
            .label("Algerian Dinar"),
        C::new("EGP").symbol("ﺝ.ﻡ.").decimal('٫').grouping('٬').places(3)
            .aliases(["E£", "E&pound;"]).label("Egyptian Pound"),
        C::new("ETB").symbol("Br").decimal(',').grouping(' ').aliases(["ብር"])
            .no_symbol_match().label("Egyptian Pound"),
        C::new("FJD").symbol("$").no_symbol_match().label("Fijian Dollar").separator(""),
        C::new("GEL").symbol("ლ").aliases(["₾", "GEL"]).label("Georgian Lari"),
        C::new("GMD").symbol("D").label("Gambian Dalasi"),
        C::new("GTQ").symbol("Q").label("Guatemalan Quetzal"),
        C::new("HKD").symbol("HK$").label("Hong Kong Dollar"),
        C::new("HNL").symbol("L").decimal(',').grouping('.').label("Honduran lempira"),
        C::new("HRK").symbol("kn").decimal(',').grouping('.').label("Croatian Kuna"),
        C::new("IDR").symbol("Rp").places(0).label("Indonesian Rupiah"),
        C::new("ILS").symbol("₪").label("Israeli Shekel"),
        C::new("IRR").symbol("﷼").decimal('٫').grouping('٬').places(0).label("Iranian Rial"),
        C::new("ISK").symbol("Íkr").label("Icelandic króna"),
        C::new("JMD").symbol("J$").label("Jamaican Dollar"),
        C::new("JOD").symbol("ﺩ.ﺃ.").decimal('٫').grouping('٬').label("Jordan Dinar"),
        C::new("JPY").symbol("￥").aliases(["¥", "円", "圓"]).label("Japanese Yen").places(0),
        C::new("KES").symbol("KSh").succeeds().label("Kenyan Shilling"),
        C::new("KRW").symbol("₩").label("South Korean Wong"),
        C::new("KWD").symbol("ﺩ.ﻙ").decimal('٫').grouping('٬').places(3).aliases(["K.D."])
            .label("Kuwaiti Dinar"),
        C::new("KHR").symbol("៛").label("Cambodian riel"),
        C::new("KYD").symbol("$").no_symbol_match().label("Caymanian Dollar").separator(""),
        C::new("KZT").symbol("₸").decimal(',').grouping(' ').label("Kazakhstani Tenge"),
        C::new("LAK").symbol("₭").label("Laotian Kip"),
        C::new("LKR").symbol("රු").aliases(["ரூ"]).label("Sri Lankan Rupee"),
        C::new("LTL").symbol("Lt").label("Lithuanian Litas"),
        C::new("LBP").symbol("ل.ل").decimal('٫').grouping('٬').label("Lebanese Pound"),
        C::new("LYD").symbol("ﻝ.ﺩ").label("Lybian Dinar"),
        C::new("MAD").symbol("ﺩ.ﻡ.").label("Maroccan Dirham"),
        C::new("QAR").symbol("ر.ق").label("Qatari riyal"),
        C::new("MDL").decimal(',').grouping('.').label("Moldawian Leu"),
        C::new("MKD").symbol("ден").label("Makedonian Denar"),
        C::new("MOP").symbol("MOP$").label("Macau Pataca"),
        C::new("MYR").symbol("RM").label("Malaysian Ringgit"),
        C::new("MMK").symbol("K").label("Burmese Kyat"),
        C::new("MNT").symbol("₮").label("Mongolian tögrög"),
        C::new("MGA").symbol("Ar").decimal(',').grouping(' ').label("Malagasy Ariary"),
        C::new("NAD").symbol("N$").grouping(' ').label("Namibian Dollar"),
        C::new("NGN").symbol("₦").label("Nigerian Naira"),
        C::new("NIO").symbol("C$").decimal(',').no_symbol_match().label("Nicaraguan Córdoba"),
        C::new("NPR").symbol("रू.").succeeds().aliases(["₨", "नेरू"]).label("Nepalese Rupee"),
        C::new("NZD").symbol("$").grouping('.').no_symbol_match()
            .label("New Zealand Dollar").separator(""),
        C::new("OMR").symbol("ﺭ.ﻉ.").decimal('٫').grouping('٬').places(3).label("Omani Rial"),
        C::new("PAB").symbol("B/.").decimal(',').grouping(' ').label("Panamanian Balboa"),
        C::new("PEN").symbol("S/.").succeeds().label("Peruvian Sol"),
        C::new("PHP").symbol("₱").label("Philippine Peso"),
        C::new("PKR").symbol("Rs").succeeds().label("Pakistani rupee"),
        C::new("PYG").symbol("₲").succeeds().label("Paraguayan guaraní"),
        C::new("RWF").symbol("R₣").decimal(',').grouping(' ').aliases(["FRw", "RF"])
            .label("Rwandan Franc"),
        C::new("SAR").symbol("ﺭ.ﺱ").decimal('٫').grouping('٬').places(0).label("Saudi Riyal"),
        C::new("SGD").symbol("S$").label("Singapur Dollar").separator(""),
        C::new("SRD").symbol("$").no_symbol_match().label("Surinamese Dollar").separator(""),
        C::new("THB").symbol("฿").places(0).label("Thai Baht"),
        C::new("TZS").symbol("TSh").succeeds().places(0).label("Tanzanian shilling"),
        C::new("TND").symbol("ﺩ.ﺕ.").decimal(',').grouping('.').places(3)
            .label("Tunesian Dinar"),
        C::new("TWD").symbol("NT$").succeeds().label("Taiwan Dollar"),
        C::new("UYU").symbol("$U").label("Uruguayan Peso"),
        C::new("VEF").symbol("Bs.").decimal(',').grouping('.').label("Venezuelan Bolivar"),
        C::new("VND").symbol("₫").decimal(',').grouping('.').places(0).succeeds()
            .aliases(["đồng"]).label("Vietnamese Dong"),
        C::new("WST").symbol("$").no_symbol_match().label("Samoan Tala").separator(""),
        C::new("XAF").symbol("CFA").succeeds().label("CFA Franc (Cent.)"),
        C::new("XCD").symbol("$").no_symbol_match().label("East Caribbean Dollar").separator(""),
        C::new("XOF").symbol("CFA").decimal('٫').grouping('٬').succeeds().no_symbol_match()
            .label("CFA Franc (West.)"),
        C::new("XPF").symbol("CFP").decimal('٫').grouping('٬').succeeds().no_symbol_match()
            .label("CFP Franc"),
        C::new("YER").symbol("﷼").succeeds().no_symbol_match().label("Yemeni rial"),
        C::new("ZAR").symbol("R").no_symbol_match().decimal(',').grouping(' ')
            .label("South African Rand"),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
