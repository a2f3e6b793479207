//! Static ISO 4217 currency table.

use centum_shared::Currency;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One row of the static ISO 4217 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCurrency {
    /// Alphabetic code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Minor-unit decimal places.
    pub decimal_places: u32,
    /// Common display symbol.
    pub symbol: &'static str,
}

impl IsoCurrency {
    const fn new(
        code: &'static str,
        name: &'static str,
        decimal_places: u32,
        symbol: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            decimal_places,
            symbol,
        }
    }

    /// Converts this row into an owned `Currency`.
    #[must_use]
    pub fn to_currency(&self) -> Currency {
        Currency {
            code: self.code.to_string(),
            name: self.name.to_string(),
            decimal_places: self.decimal_places,
            symbol: self.symbol.to_string(),
        }
    }
}

/// Active ISO 4217 currencies.
pub static ISO_CURRENCIES: &[IsoCurrency] = &[
    IsoCurrency::new("AED", "UAE Dirham", 2, "د.إ"),
    IsoCurrency::new("AFN", "Afghani", 2, "؋"),
    IsoCurrency::new("ALL", "Lek", 2, "L"),
    IsoCurrency::new("AMD", "Armenian Dram", 2, "֏"),
    IsoCurrency::new("ANG", "Netherlands Antillean Guilder", 2, "ƒ"),
    IsoCurrency::new("AOA", "Kwanza", 2, "Kz"),
    IsoCurrency::new("ARS", "Argentine Peso", 2, "$"),
    IsoCurrency::new("AUD", "Australian Dollar", 2, "A$"),
    IsoCurrency::new("AWG", "Aruban Florin", 2, "ƒ"),
    IsoCurrency::new("AZN", "Azerbaijan Manat", 2, "₼"),
    IsoCurrency::new("BAM", "Convertible Mark", 2, "KM"),
    IsoCurrency::new("BBD", "Barbados Dollar", 2, "$"),
    IsoCurrency::new("BDT", "Taka", 2, "৳"),
    IsoCurrency::new("BGN", "Bulgarian Lev", 2, "лв."),
    IsoCurrency::new("BHD", "Bahraini Dinar", 3, ".د.ب"),
    IsoCurrency::new("BIF", "Burundi Franc", 0, "FBu"),
    IsoCurrency::new("BMD", "Bermudian Dollar", 2, "$"),
    IsoCurrency::new("BND", "Brunei Dollar", 2, "$"),
    IsoCurrency::new("BOB", "Boliviano", 2, "Bs."),
    IsoCurrency::new("BRL", "Brazilian Real", 2, "R$"),
    IsoCurrency::new("BSD", "Bahamian Dollar", 2, "$"),
    IsoCurrency::new("BTN", "Ngultrum", 2, "Nu."),
    IsoCurrency::new("BWP", "Pula", 2, "P"),
    IsoCurrency::new("BYN", "Belarusian Ruble", 2, "Br"),
    IsoCurrency::new("BZD", "Belize Dollar", 2, "BZ$"),
    IsoCurrency::new("CAD", "Canadian Dollar", 2, "CA$"),
    IsoCurrency::new("CDF", "Congolese Franc", 2, "FC"),
    IsoCurrency::new("CHF", "Swiss Franc", 2, "CHF"),
    IsoCurrency::new("CLF", "Unidad de Fomento", 4, "UF"),
    IsoCurrency::new("CLP", "Chilean Peso", 0, "$"),
    IsoCurrency::new("CNY", "Yuan Renminbi", 2, "¥"),
    IsoCurrency::new("COP", "Colombian Peso", 2, "$"),
    IsoCurrency::new("CRC", "Costa Rican Colon", 2, "₡"),
    IsoCurrency::new("CUP", "Cuban Peso", 2, "$"),
    IsoCurrency::new("CVE", "Cabo Verde Escudo", 2, "$"),
    IsoCurrency::new("CZK", "Czech Koruna", 2, "Kč"),
    IsoCurrency::new("DJF", "Djibouti Franc", 0, "Fdj"),
    IsoCurrency::new("DKK", "Danish Krone", 2, "kr."),
    IsoCurrency::new("DOP", "Dominican Peso", 2, "RD$"),
    IsoCurrency::new("DZD", "Algerian Dinar", 2, "د.ج"),
    IsoCurrency::new("EGP", "Egyptian Pound", 2, "E£"),
    IsoCurrency::new("ERN", "Nakfa", 2, "Nfk"),
    IsoCurrency::new("ETB", "Ethiopian Birr", 2, "Br"),
    IsoCurrency::new("EUR", "Euro", 2, "€"),
    IsoCurrency::new("FJD", "Fiji Dollar", 2, "FJ$"),
    IsoCurrency::new("FKP", "Falkland Islands Pound", 2, "£"),
    IsoCurrency::new("GBP", "Pound Sterling", 2, "£"),
    IsoCurrency::new("GEL", "Lari", 2, "₾"),
    IsoCurrency::new("GHS", "Ghana Cedi", 2, "GH₵"),
    IsoCurrency::new("GIP", "Gibraltar Pound", 2, "£"),
    IsoCurrency::new("GMD", "Dalasi", 2, "D"),
    IsoCurrency::new("GNF", "Guinean Franc", 0, "FG"),
    IsoCurrency::new("GTQ", "Quetzal", 2, "Q"),
    IsoCurrency::new("GYD", "Guyana Dollar", 2, "$"),
    IsoCurrency::new("HKD", "Hong Kong Dollar", 2, "HK$"),
    IsoCurrency::new("HNL", "Lempira", 2, "L"),
    IsoCurrency::new("HTG", "Gourde", 2, "G"),
    IsoCurrency::new("HUF", "Forint", 2, "Ft"),
    IsoCurrency::new("IDR", "Rupiah", 2, "Rp"),
    IsoCurrency::new("ILS", "New Israeli Sheqel", 2, "₪"),
    IsoCurrency::new("INR", "Indian Rupee", 2, "₹"),
    IsoCurrency::new("IQD", "Iraqi Dinar", 3, "ع.د"),
    IsoCurrency::new("IRR", "Iranian Rial", 2, "﷼"),
    IsoCurrency::new("ISK", "Iceland Krona", 0, "kr"),
    IsoCurrency::new("JMD", "Jamaican Dollar", 2, "J$"),
    IsoCurrency::new("JOD", "Jordanian Dinar", 3, "د.ا"),
    IsoCurrency::new("JPY", "Yen", 0, "¥"),
    IsoCurrency::new("KES", "Kenyan Shilling", 2, "KSh"),
    IsoCurrency::new("KGS", "Som", 2, "с"),
    IsoCurrency::new("KHR", "Riel", 2, "៛"),
    IsoCurrency::new("KMF", "Comorian Franc", 0, "CF"),
    IsoCurrency::new("KPW", "North Korean Won", 2, "₩"),
    IsoCurrency::new("KRW", "Won", 0, "₩"),
    IsoCurrency::new("KWD", "Kuwaiti Dinar", 3, "د.ك"),
    IsoCurrency::new("KYD", "Cayman Islands Dollar", 2, "$"),
    IsoCurrency::new("KZT", "Tenge", 2, "₸"),
    IsoCurrency::new("LAK", "Lao Kip", 2, "₭"),
    IsoCurrency::new("LBP", "Lebanese Pound", 2, "ل.ل"),
    IsoCurrency::new("LKR", "Sri Lanka Rupee", 2, "Rs"),
    IsoCurrency::new("LRD", "Liberian Dollar", 2, "$"),
    IsoCurrency::new("LSL", "Loti", 2, "L"),
    IsoCurrency::new("LYD", "Libyan Dinar", 3, "ل.د"),
    IsoCurrency::new("MAD", "Moroccan Dirham", 2, "د.م."),
    IsoCurrency::new("MDL", "Moldovan Leu", 2, "L"),
    IsoCurrency::new("MGA", "Malagasy Ariary", 2, "Ar"),
    IsoCurrency::new("MKD", "Denar", 2, "ден"),
    IsoCurrency::new("MMK", "Kyat", 2, "K"),
    IsoCurrency::new("MNT", "Tugrik", 2, "₮"),
    IsoCurrency::new("MOP", "Pataca", 2, "MOP$"),
    IsoCurrency::new("MRU", "Ouguiya", 2, "UM"),
    IsoCurrency::new("MUR", "Mauritius Rupee", 2, "₨"),
    IsoCurrency::new("MVR", "Rufiyaa", 2, "Rf"),
    IsoCurrency::new("MWK", "Malawi Kwacha", 2, "MK"),
    IsoCurrency::new("MXN", "Mexican Peso", 2, "MX$"),
    IsoCurrency::new("MYR", "Malaysian Ringgit", 2, "RM"),
    IsoCurrency::new("MZN", "Mozambique Metical", 2, "MT"),
    IsoCurrency::new("NAD", "Namibia Dollar", 2, "$"),
    IsoCurrency::new("NGN", "Naira", 2, "₦"),
    IsoCurrency::new("NIO", "Cordoba Oro", 2, "C$"),
    IsoCurrency::new("NOK", "Norwegian Krone", 2, "kr"),
    IsoCurrency::new("NPR", "Nepalese Rupee", 2, "Rs"),
    IsoCurrency::new("NZD", "New Zealand Dollar", 2, "NZ$"),
    IsoCurrency::new("OMR", "Rial Omani", 3, "ر.ع."),
    IsoCurrency::new("PAB", "Balboa", 2, "B/."),
    IsoCurrency::new("PEN", "Sol", 2, "S/"),
    IsoCurrency::new("PGK", "Kina", 2, "K"),
    IsoCurrency::new("PHP", "Philippine Peso", 2, "₱"),
    IsoCurrency::new("PKR", "Pakistan Rupee", 2, "Rs"),
    IsoCurrency::new("PLN", "Zloty", 2, "zł"),
    IsoCurrency::new("PYG", "Guarani", 0, "₲"),
    IsoCurrency::new("QAR", "Qatari Rial", 2, "ر.ق"),
    IsoCurrency::new("RON", "Romanian Leu", 2, "lei"),
    IsoCurrency::new("RSD", "Serbian Dinar", 2, "дин."),
    IsoCurrency::new("RUB", "Russian Ruble", 2, "₽"),
    IsoCurrency::new("RWF", "Rwanda Franc", 0, "FRw"),
    IsoCurrency::new("SAR", "Saudi Riyal", 2, "ر.س"),
    IsoCurrency::new("SBD", "Solomon Islands Dollar", 2, "$"),
    IsoCurrency::new("SCR", "Seychelles Rupee", 2, "₨"),
    IsoCurrency::new("SDG", "Sudanese Pound", 2, "ج.س."),
    IsoCurrency::new("SEK", "Swedish Krona", 2, "kr"),
    IsoCurrency::new("SGD", "Singapore Dollar", 2, "S$"),
    IsoCurrency::new("SHP", "Saint Helena Pound", 2, "£"),
    IsoCurrency::new("SLE", "Leone", 2, "Le"),
    IsoCurrency::new("SOS", "Somali Shilling", 2, "Sh"),
    IsoCurrency::new("SRD", "Surinam Dollar", 2, "$"),
    IsoCurrency::new("SSP", "South Sudanese Pound", 2, "£"),
    IsoCurrency::new("STN", "Dobra", 2, "Db"),
    IsoCurrency::new("SYP", "Syrian Pound", 2, "£S"),
    IsoCurrency::new("SZL", "Lilangeni", 2, "E"),
    IsoCurrency::new("THB", "Baht", 2, "฿"),
    IsoCurrency::new("TJS", "Somoni", 2, "SM"),
    IsoCurrency::new("TMT", "Turkmenistan New Manat", 2, "m"),
    IsoCurrency::new("TND", "Tunisian Dinar", 3, "د.ت"),
    IsoCurrency::new("TOP", "Pa'anga", 2, "T$"),
    IsoCurrency::new("TRY", "Turkish Lira", 2, "₺"),
    IsoCurrency::new("TTD", "Trinidad and Tobago Dollar", 2, "TT$"),
    IsoCurrency::new("TWD", "New Taiwan Dollar", 2, "NT$"),
    IsoCurrency::new("TZS", "Tanzanian Shilling", 2, "TSh"),
    IsoCurrency::new("UAH", "Hryvnia", 2, "₴"),
    IsoCurrency::new("UGX", "Uganda Shilling", 0, "USh"),
    IsoCurrency::new("USD", "US Dollar", 2, "$"),
    IsoCurrency::new("UYU", "Peso Uruguayo", 2, "$U"),
    IsoCurrency::new("UYW", "Unidad Previsional", 4, "UP"),
    IsoCurrency::new("UZS", "Uzbekistan Sum", 2, "soʻm"),
    IsoCurrency::new("VES", "Bolivar Soberano", 2, "Bs.S"),
    IsoCurrency::new("VND", "Dong", 0, "₫"),
    IsoCurrency::new("VUV", "Vatu", 0, "VT"),
    IsoCurrency::new("WST", "Tala", 2, "WS$"),
    IsoCurrency::new("XAF", "CFA Franc BEAC", 0, "FCFA"),
    IsoCurrency::new("XCD", "East Caribbean Dollar", 2, "EC$"),
    IsoCurrency::new("XOF", "CFA Franc BCEAO", 0, "CFA"),
    IsoCurrency::new("XPF", "CFP Franc", 0, "₣"),
    IsoCurrency::new("YER", "Yemeni Rial", 2, "﷼"),
    IsoCurrency::new("ZAR", "Rand", 2, "R"),
    IsoCurrency::new("ZMW", "Zambian Kwacha", 2, "ZK"),
    IsoCurrency::new("ZWG", "Zimbabwe Gold", 2, "ZiG"),
];

static ISO_INDEX: Lazy<HashMap<&'static str, &'static IsoCurrency>> =
    Lazy::new(|| ISO_CURRENCIES.iter().map(|c| (c.code, c)).collect());

/// Looks up an ISO row by uppercase code.
#[must_use]
pub fn find(code: &str) -> Option<&'static IsoCurrency> {
    ISO_INDEX.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique_and_uppercase() {
        let mut seen = HashSet::new();
        for currency in ISO_CURRENCIES {
            assert_eq!(currency.code.len(), 3, "{}", currency.code);
            assert_eq!(currency.code, currency.code.to_uppercase());
            assert!(seen.insert(currency.code), "duplicate {}", currency.code);
        }
    }

    #[test]
    fn test_known_decimal_places() {
        assert_eq!(find("USD").map(|c| c.decimal_places), Some(2));
        assert_eq!(find("JPY").map(|c| c.decimal_places), Some(0));
        assert_eq!(find("KWD").map(|c| c.decimal_places), Some(3));
        assert_eq!(find("CLF").map(|c| c.decimal_places), Some(4));
        assert_eq!(find("BRL").map(|c| c.symbol), Some("R$"));
        assert!(find("usd").is_none());
    }
}
