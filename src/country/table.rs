//! Static ISO 3166-1 alpha-2 table with English and German display names.

/// One row of the country table.
#[derive(Debug, Clone, Copy)]
pub struct Country {
    /// Upper-case two-letter ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// English display name.
    pub en: &'static str,
    /// German display name.
    pub de: &'static str,
}

/// All ISO 3166-1 alpha-2 entries, ordered by code.
pub static COUNTRIES: &[Country] = &[
    Country { code: "AD", en: "Andorra", de: "Andorra" },
    Country { code: "AE", en: "United Arab Emirates", de: "Vereinigte Arabische Emirate" },
    Country { code: "AF", en: "Afghanistan", de: "Afghanistan" },
    Country { code: "AG", en: "Antigua and Barbuda", de: "Antigua und Barbuda" },
    Country { code: "AI", en: "Anguilla", de: "Anguilla" },
    Country { code: "AL", en: "Albania", de: "Albanien" },
    Country { code: "AM", en: "Armenia", de: "Armenien" },
    Country { code: "AO", en: "Angola", de: "Angola" },
    Country { code: "AQ", en: "Antarctica", de: "Antarktis" },
    Country { code: "AR", en: "Argentina", de: "Argentinien" },
    Country { code: "AS", en: "American Samoa", de: "Amerikanisch-Samoa" },
    Country { code: "AT", en: "Austria", de: "Österreich" },
    Country { code: "AU", en: "Australia", de: "Australien" },
    Country { code: "AW", en: "Aruba", de: "Aruba" },
    Country { code: "AX", en: "Åland Islands", de: "Ålandinseln" },
    Country { code: "AZ", en: "Azerbaijan", de: "Aserbaidschan" },
    Country { code: "BA", en: "Bosnia and Herzegovina", de: "Bosnien und Herzegowina" },
    Country { code: "BB", en: "Barbados", de: "Barbados" },
    Country { code: "BD", en: "Bangladesh", de: "Bangladesch" },
    Country { code: "BE", en: "Belgium", de: "Belgien" },
    Country { code: "BF", en: "Burkina Faso", de: "Burkina Faso" },
    Country { code: "BG", en: "Bulgaria", de: "Bulgarien" },
    Country { code: "BH", en: "Bahrain", de: "Bahrain" },
    Country { code: "BI", en: "Burundi", de: "Burundi" },
    Country { code: "BJ", en: "Benin", de: "Benin" },
    Country { code: "BL", en: "Saint Barthélemy", de: "St. Barthélemy" },
    Country { code: "BM", en: "Bermuda", de: "Bermuda" },
    Country { code: "BN", en: "Brunei", de: "Brunei Darussalam" },
    Country { code: "BO", en: "Bolivia", de: "Bolivien" },
    Country { code: "BQ", en: "Caribbean Netherlands", de: "Karibische Niederlande" },
    Country { code: "BR", en: "Brazil", de: "Brasilien" },
    Country { code: "BS", en: "Bahamas", de: "Bahamas" },
    Country { code: "BT", en: "Bhutan", de: "Bhutan" },
    Country { code: "BV", en: "Bouvet Island", de: "Bouvetinsel" },
    Country { code: "BW", en: "Botswana", de: "Botsuana" },
    Country { code: "BY", en: "Belarus", de: "Belarus" },
    Country { code: "BZ", en: "Belize", de: "Belize" },
    Country { code: "CA", en: "Canada", de: "Kanada" },
    Country { code: "CC", en: "Cocos Islands", de: "Kokosinseln" },
    Country { code: "CD", en: "Democratic Republic of the Congo", de: "Demokratische Republik Kongo" },
    Country { code: "CF", en: "Central African Republic", de: "Zentralafrikanische Republik" },
    Country { code: "CG", en: "Republic of the Congo", de: "Kongo" },
    Country { code: "CH", en: "Switzerland", de: "Schweiz" },
    Country { code: "CI", en: "Côte d'Ivoire", de: "Elfenbeinküste" },
    Country { code: "CK", en: "Cook Islands", de: "Cookinseln" },
    Country { code: "CL", en: "Chile", de: "Chile" },
    Country { code: "CM", en: "Cameroon", de: "Kamerun" },
    Country { code: "CN", en: "China", de: "China" },
    Country { code: "CO", en: "Colombia", de: "Kolumbien" },
    Country { code: "CR", en: "Costa Rica", de: "Costa Rica" },
    Country { code: "CU", en: "Cuba", de: "Kuba" },
    Country { code: "CV", en: "Cape Verde", de: "Kap Verde" },
    Country { code: "CW", en: "Curaçao", de: "Curaçao" },
    Country { code: "CX", en: "Christmas Island", de: "Weihnachtsinsel" },
    Country { code: "CY", en: "Cyprus", de: "Zypern" },
    Country { code: "CZ", en: "Czechia", de: "Tschechien" },
    Country { code: "DE", en: "Germany", de: "Deutschland" },
    Country { code: "DJ", en: "Djibouti", de: "Dschibuti" },
    Country { code: "DK", en: "Denmark", de: "Dänemark" },
    Country { code: "DM", en: "Dominica", de: "Dominica" },
    Country { code: "DO", en: "Dominican Republic", de: "Dominikanische Republik" },
    Country { code: "DZ", en: "Algeria", de: "Algerien" },
    Country { code: "EC", en: "Ecuador", de: "Ecuador" },
    Country { code: "EE", en: "Estonia", de: "Estland" },
    Country { code: "EG", en: "Egypt", de: "Ägypten" },
    Country { code: "EH", en: "Western Sahara", de: "Westsahara" },
    Country { code: "ER", en: "Eritrea", de: "Eritrea" },
    Country { code: "ES", en: "Spain", de: "Spanien" },
    Country { code: "ET", en: "Ethiopia", de: "Äthiopien" },
    Country { code: "FI", en: "Finland", de: "Finnland" },
    Country { code: "FJ", en: "Fiji", de: "Fidschi" },
    Country { code: "FK", en: "Falkland Islands", de: "Falklandinseln" },
    Country { code: "FM", en: "Micronesia", de: "Mikronesien" },
    Country { code: "FO", en: "Faroe Islands", de: "Färöer" },
    Country { code: "FR", en: "France", de: "Frankreich" },
    Country { code: "GA", en: "Gabon", de: "Gabun" },
    Country { code: "GB", en: "United Kingdom", de: "Vereinigtes Königreich" },
    Country { code: "GD", en: "Grenada", de: "Grenada" },
    Country { code: "GE", en: "Georgia", de: "Georgien" },
    Country { code: "GF", en: "French Guiana", de: "Französisch-Guayana" },
    Country { code: "GG", en: "Guernsey", de: "Guernsey" },
    Country { code: "GH", en: "Ghana", de: "Ghana" },
    Country { code: "GI", en: "Gibraltar", de: "Gibraltar" },
    Country { code: "GL", en: "Greenland", de: "Grönland" },
    Country { code: "GM", en: "Gambia", de: "Gambia" },
    Country { code: "GN", en: "Guinea", de: "Guinea" },
    Country { code: "GP", en: "Guadeloupe", de: "Guadeloupe" },
    Country { code: "GQ", en: "Equatorial Guinea", de: "Äquatorialguinea" },
    Country { code: "GR", en: "Greece", de: "Griechenland" },
    Country { code: "GS", en: "South Georgia and the South Sandwich Islands", de: "Südgeorgien und die Südlichen Sandwichinseln" },
    Country { code: "GT", en: "Guatemala", de: "Guatemala" },
    Country { code: "GU", en: "Guam", de: "Guam" },
    Country { code: "GW", en: "Guinea-Bissau", de: "Guinea-Bissau" },
    Country { code: "GY", en: "Guyana", de: "Guyana" },
    Country { code: "HK", en: "Hong Kong", de: "Hongkong" },
    Country { code: "HM", en: "Heard Island and McDonald Islands", de: "Heard und McDonaldinseln" },
    Country { code: "HN", en: "Honduras", de: "Honduras" },
    Country { code: "HR", en: "Croatia", de: "Kroatien" },
    Country { code: "HT", en: "Haiti", de: "Haiti" },
    Country { code: "HU", en: "Hungary", de: "Ungarn" },
    Country { code: "ID", en: "Indonesia", de: "Indonesien" },
    Country { code: "IE", en: "Ireland", de: "Irland" },
    Country { code: "IL", en: "Israel", de: "Israel" },
    Country { code: "IM", en: "Isle of Man", de: "Isle of Man" },
    Country { code: "IN", en: "India", de: "Indien" },
    Country { code: "IO", en: "British Indian Ocean Territory", de: "Britisches Territorium im Indischen Ozean" },
    Country { code: "IQ", en: "Iraq", de: "Irak" },
    Country { code: "IR", en: "Iran", de: "Iran" },
    Country { code: "IS", en: "Iceland", de: "Island" },
    Country { code: "IT", en: "Italy", de: "Italien" },
    Country { code: "JE", en: "Jersey", de: "Jersey" },
    Country { code: "JM", en: "Jamaica", de: "Jamaika" },
    Country { code: "JO", en: "Jordan", de: "Jordanien" },
    Country { code: "JP", en: "Japan", de: "Japan" },
    Country { code: "KE", en: "Kenya", de: "Kenia" },
    Country { code: "KG", en: "Kyrgyzstan", de: "Kirgisistan" },
    Country { code: "KH", en: "Cambodia", de: "Kambodscha" },
    Country { code: "KI", en: "Kiribati", de: "Kiribati" },
    Country { code: "KM", en: "Comoros", de: "Komoren" },
    Country { code: "KN", en: "Saint Kitts and Nevis", de: "St. Kitts und Nevis" },
    Country { code: "KP", en: "North Korea", de: "Nordkorea" },
    Country { code: "KR", en: "South Korea", de: "Südkorea" },
    Country { code: "KW", en: "Kuwait", de: "Kuwait" },
    Country { code: "KY", en: "Cayman Islands", de: "Kaimaninseln" },
    Country { code: "KZ", en: "Kazakhstan", de: "Kasachstan" },
    Country { code: "LA", en: "Laos", de: "Laos" },
    Country { code: "LB", en: "Lebanon", de: "Libanon" },
    Country { code: "LC", en: "Saint Lucia", de: "St. Lucia" },
    Country { code: "LI", en: "Liechtenstein", de: "Liechtenstein" },
    Country { code: "LK", en: "Sri Lanka", de: "Sri Lanka" },
    Country { code: "LR", en: "Liberia", de: "Liberia" },
    Country { code: "LS", en: "Lesotho", de: "Lesotho" },
    Country { code: "LT", en: "Lithuania", de: "Litauen" },
    Country { code: "LU", en: "Luxembourg", de: "Luxemburg" },
    Country { code: "LV", en: "Latvia", de: "Lettland" },
    Country { code: "LY", en: "Libya", de: "Libyen" },
    Country { code: "MA", en: "Morocco", de: "Marokko" },
    Country { code: "MC", en: "Monaco", de: "Monaco" },
    Country { code: "MD", en: "Moldova", de: "Republik Moldau" },
    Country { code: "ME", en: "Montenegro", de: "Montenegro" },
    Country { code: "MF", en: "Saint Martin", de: "St. Martin" },
    Country { code: "MG", en: "Madagascar", de: "Madagaskar" },
    Country { code: "MH", en: "Marshall Islands", de: "Marshallinseln" },
    Country { code: "MK", en: "North Macedonia", de: "Nordmazedonien" },
    Country { code: "ML", en: "Mali", de: "Mali" },
    Country { code: "MM", en: "Myanmar", de: "Myanmar" },
    Country { code: "MN", en: "Mongolia", de: "Mongolei" },
    Country { code: "MO", en: "Macao", de: "Macau" },
    Country { code: "MP", en: "Northern Mariana Islands", de: "Nördliche Marianen" },
    Country { code: "MQ", en: "Martinique", de: "Martinique" },
    Country { code: "MR", en: "Mauritania", de: "Mauretanien" },
    Country { code: "MS", en: "Montserrat", de: "Montserrat" },
    Country { code: "MT", en: "Malta", de: "Malta" },
    Country { code: "MU", en: "Mauritius", de: "Mauritius" },
    Country { code: "MV", en: "Maldives", de: "Malediven" },
    Country { code: "MW", en: "Malawi", de: "Malawi" },
    Country { code: "MX", en: "Mexico", de: "Mexiko" },
    Country { code: "MY", en: "Malaysia", de: "Malaysia" },
    Country { code: "MZ", en: "Mozambique", de: "Mosambik" },
    Country { code: "NA", en: "Namibia", de: "Namibia" },
    Country { code: "NC", en: "New Caledonia", de: "Neukaledonien" },
    Country { code: "NE", en: "Niger", de: "Niger" },
    Country { code: "NF", en: "Norfolk Island", de: "Norfolkinsel" },
    Country { code: "NG", en: "Nigeria", de: "Nigeria" },
    Country { code: "NI", en: "Nicaragua", de: "Nicaragua" },
    Country { code: "NL", en: "Netherlands", de: "Niederlande" },
    Country { code: "NO", en: "Norway", de: "Norwegen" },
    Country { code: "NP", en: "Nepal", de: "Nepal" },
    Country { code: "NR", en: "Nauru", de: "Nauru" },
    Country { code: "NU", en: "Niue", de: "Niue" },
    Country { code: "NZ", en: "New Zealand", de: "Neuseeland" },
    Country { code: "OM", en: "Oman", de: "Oman" },
    Country { code: "PA", en: "Panama", de: "Panama" },
    Country { code: "PE", en: "Peru", de: "Peru" },
    Country { code: "PF", en: "French Polynesia", de: "Französisch-Polynesien" },
    Country { code: "PG", en: "Papua New Guinea", de: "Papua-Neuguinea" },
    Country { code: "PH", en: "Philippines", de: "Philippinen" },
    Country { code: "PK", en: "Pakistan", de: "Pakistan" },
    Country { code: "PL", en: "Poland", de: "Polen" },
    Country { code: "PM", en: "Saint Pierre and Miquelon", de: "St. Pierre und Miquelon" },
    Country { code: "PN", en: "Pitcairn Islands", de: "Pitcairninseln" },
    Country { code: "PR", en: "Puerto Rico", de: "Puerto Rico" },
    Country { code: "PS", en: "Palestine", de: "Palästina" },
    Country { code: "PT", en: "Portugal", de: "Portugal" },
    Country { code: "PW", en: "Palau", de: "Palau" },
    Country { code: "PY", en: "Paraguay", de: "Paraguay" },
    Country { code: "QA", en: "Qatar", de: "Katar" },
    Country { code: "RE", en: "Réunion", de: "Réunion" },
    Country { code: "RO", en: "Romania", de: "Rumänien" },
    Country { code: "RS", en: "Serbia", de: "Serbien" },
    Country { code: "RU", en: "Russia", de: "Russland" },
    Country { code: "RW", en: "Rwanda", de: "Ruanda" },
    Country { code: "SA", en: "Saudi Arabia", de: "Saudi-Arabien" },
    Country { code: "SB", en: "Solomon Islands", de: "Salomonen" },
    Country { code: "SC", en: "Seychelles", de: "Seychellen" },
    Country { code: "SD", en: "Sudan", de: "Sudan" },
    Country { code: "SE", en: "Sweden", de: "Schweden" },
    Country { code: "SG", en: "Singapore", de: "Singapur" },
    Country { code: "SH", en: "Saint Helena", de: "St. Helena" },
    Country { code: "SI", en: "Slovenia", de: "Slowenien" },
    Country { code: "SJ", en: "Svalbard and Jan Mayen", de: "Spitzbergen und Jan Mayen" },
    Country { code: "SK", en: "Slovakia", de: "Slowakei" },
    Country { code: "SL", en: "Sierra Leone", de: "Sierra Leone" },
    Country { code: "SM", en: "San Marino", de: "San Marino" },
    Country { code: "SN", en: "Senegal", de: "Senegal" },
    Country { code: "SO", en: "Somalia", de: "Somalia" },
    Country { code: "SR", en: "Suriname", de: "Suriname" },
    Country { code: "SS", en: "South Sudan", de: "Südsudan" },
    Country { code: "ST", en: "São Tomé and Príncipe", de: "São Tomé und Príncipe" },
    Country { code: "SV", en: "El Salvador", de: "El Salvador" },
    Country { code: "SX", en: "Sint Maarten", de: "Sint Maarten" },
    Country { code: "SY", en: "Syria", de: "Syrien" },
    Country { code: "SZ", en: "Eswatini", de: "Eswatini" },
    Country { code: "TC", en: "Turks and Caicos Islands", de: "Turks- und Caicosinseln" },
    Country { code: "TD", en: "Chad", de: "Tschad" },
    Country { code: "TF", en: "French Southern Territories", de: "Französische Süd- und Antarktisgebiete" },
    Country { code: "TG", en: "Togo", de: "Togo" },
    Country { code: "TH", en: "Thailand", de: "Thailand" },
    Country { code: "TJ", en: "Tajikistan", de: "Tadschikistan" },
    Country { code: "TK", en: "Tokelau", de: "Tokelau" },
    Country { code: "TL", en: "Timor-Leste", de: "Osttimor" },
    Country { code: "TM", en: "Turkmenistan", de: "Turkmenistan" },
    Country { code: "TN", en: "Tunisia", de: "Tunesien" },
    Country { code: "TO", en: "Tonga", de: "Tonga" },
    Country { code: "TR", en: "Turkey", de: "Türkei" },
    Country { code: "TT", en: "Trinidad and Tobago", de: "Trinidad und Tobago" },
    Country { code: "TV", en: "Tuvalu", de: "Tuvalu" },
    Country { code: "TW", en: "Taiwan", de: "Taiwan" },
    Country { code: "TZ", en: "Tanzania", de: "Tansania" },
    Country { code: "UA", en: "Ukraine", de: "Ukraine" },
    Country { code: "UG", en: "Uganda", de: "Uganda" },
    Country { code: "UM", en: "United States Minor Outlying Islands", de: "Amerikanische Überseeinseln" },
    Country { code: "US", en: "United States", de: "Vereinigte Staaten" },
    Country { code: "UY", en: "Uruguay", de: "Uruguay" },
    Country { code: "UZ", en: "Uzbekistan", de: "Usbekistan" },
    Country { code: "VA", en: "Vatican City", de: "Vatikanstadt" },
    Country { code: "VC", en: "Saint Vincent and the Grenadines", de: "St. Vincent und die Grenadinen" },
    Country { code: "VE", en: "Venezuela", de: "Venezuela" },
    Country { code: "VG", en: "British Virgin Islands", de: "Britische Jungferninseln" },
    Country { code: "VI", en: "U.S. Virgin Islands", de: "Amerikanische Jungferninseln" },
    Country { code: "VN", en: "Vietnam", de: "Vietnam" },
    Country { code: "VU", en: "Vanuatu", de: "Vanuatu" },
    Country { code: "WF", en: "Wallis and Futuna", de: "Wallis und Futuna" },
    Country { code: "WS", en: "Samoa", de: "Samoa" },
    Country { code: "YE", en: "Yemen", de: "Jemen" },
    Country { code: "YT", en: "Mayotte", de: "Mayotte" },
    Country { code: "ZA", en: "South Africa", de: "Südafrika" },
    Country { code: "ZM", en: "Zambia", de: "Sambia" },
    Country { code: "ZW", en: "Zimbabwe", de: "Simbabwe" },
];
