//! ISO 3166-1 country table.
//!
//! Names follow the ISO short names used by the Debian `iso-codes` data set,
//! which is what TVMaze emits in its `country.name` fields. Aliases cover the
//! common and former names seen in older upstream records.

use super::Country;

pub(super) static COUNTRIES: &[Country] = &[
    Country::new("AW", "ABW", 533, "Aruba", &[]),
    Country::new("AF", "AFG", 4, "Afghanistan", &[]),
    Country::new("AO", "AGO", 24, "Angola", &[]),
    Country::new("AI", "AIA", 660, "Anguilla", &[]),
    Country::new("AX", "ALA", 248, "Åland Islands", &[]),
    Country::new("AL", "ALB", 8, "Albania", &[]),
    Country::new("AD", "AND", 20, "Andorra", &[]),
    Country::new("AE", "ARE", 784, "United Arab Emirates", &[]),
    Country::new("AR", "ARG", 32, "Argentina", &[]),
    Country::new("AM", "ARM", 51, "Armenia", &[]),
    Country::new("AS", "ASM", 16, "American Samoa", &[]),
    Country::new("AQ", "ATA", 10, "Antarctica", &[]),
    Country::new("TF", "ATF", 260, "French Southern Territories", &[]),
    Country::new("AG", "ATG", 28, "Antigua and Barbuda", &[]),
    Country::new("AU", "AUS", 36, "Australia", &[]),
    Country::new("AT", "AUT", 40, "Austria", &[]),
    Country::new("AZ", "AZE", 31, "Azerbaijan", &[]),
    Country::new("BI", "BDI", 108, "Burundi", &[]),
    Country::new("BE", "BEL", 56, "Belgium", &[]),
    Country::new("BJ", "BEN", 204, "Benin", &[]),
    Country::new("BQ", "BES", 535, "Bonaire, Sint Eustatius and Saba", &[]),
    Country::new("BF", "BFA", 854, "Burkina Faso", &[]),
    Country::new("BD", "BGD", 50, "Bangladesh", &[]),
    Country::new("BG", "BGR", 100, "Bulgaria", &[]),
    Country::new("BH", "BHR", 48, "Bahrain", &[]),
    Country::new("BS", "BHS", 44, "Bahamas", &[]),
    Country::new("BA", "BIH", 70, "Bosnia and Herzegovina", &[]),
    Country::new("BL", "BLM", 652, "Saint Barthélemy", &[]),
    Country::new("BY", "BLR", 112, "Belarus", &[]),
    Country::new("BZ", "BLZ", 84, "Belize", &[]),
    Country::new("BM", "BMU", 60, "Bermuda", &[]),
    Country::new("BO", "BOL", 68, "Bolivia, Plurinational State of", &["Bolivia"]),
    Country::new("BR", "BRA", 76, "Brazil", &[]),
    Country::new("BB", "BRB", 52, "Barbados", &[]),
    Country::new("BN", "BRN", 96, "Brunei Darussalam", &["Brunei"]),
    Country::new("BT", "BTN", 64, "Bhutan", &[]),
    Country::new("BV", "BVT", 74, "Bouvet Island", &[]),
    Country::new("BW", "BWA", 72, "Botswana", &[]),
    Country::new("CF", "CAF", 140, "Central African Republic", &[]),
    Country::new("CA", "CAN", 124, "Canada", &[]),
    Country::new("CC", "CCK", 166, "Cocos (Keeling) Islands", &[]),
    Country::new("CH", "CHE", 756, "Switzerland", &[]),
    Country::new("CL", "CHL", 152, "Chile", &[]),
    Country::new("CN", "CHN", 156, "China", &[]),
    Country::new("CI", "CIV", 384, "Côte d'Ivoire", &["Ivory Coast"]),
    Country::new("CM", "CMR", 120, "Cameroon", &[]),
    Country::new("CD", "COD", 180, "Congo, The Democratic Republic of the", &["Democratic Republic of the Congo"]),
    Country::new("CG", "COG", 178, "Congo", &[]),
    Country::new("CK", "COK", 184, "Cook Islands", &[]),
    Country::new("CO", "COL", 170, "Colombia", &[]),
    Country::new("KM", "COM", 174, "Comoros", &[]),
    Country::new("CV", "CPV", 132, "Cabo Verde", &["Cape Verde"]),
    Country::new("CR", "CRI", 188, "Costa Rica", &[]),
    Country::new("CU", "CUB", 192, "Cuba", &[]),
    Country::new("CW", "CUW", 531, "Curaçao", &[]),
    Country::new("CX", "CXR", 162, "Christmas Island", &[]),
    Country::new("KY", "CYM", 136, "Cayman Islands", &[]),
    Country::new("CY", "CYP", 196, "Cyprus", &[]),
    Country::new("CZ", "CZE", 203, "Czechia", &["Czech Republic"]),
    Country::new("DE", "DEU", 276, "Germany", &[]),
    Country::new("DJ", "DJI", 262, "Djibouti", &[]),
    Country::new("DM", "DMA", 212, "Dominica", &[]),
    Country::new("DK", "DNK", 208, "Denmark", &[]),
    Country::new("DO", "DOM", 214, "Dominican Republic", &[]),
    Country::new("DZ", "DZA", 12, "Algeria", &[]),
    Country::new("EC", "ECU", 218, "Ecuador", &[]),
    Country::new("EG", "EGY", 818, "Egypt", &[]),
    Country::new("ER", "ERI", 232, "Eritrea", &[]),
    Country::new("EH", "ESH", 732, "Western Sahara", &[]),
    Country::new("ES", "ESP", 724, "Spain", &[]),
    Country::new("EE", "EST", 233, "Estonia", &[]),
    Country::new("ET", "ETH", 231, "Ethiopia", &[]),
    Country::new("FI", "FIN", 246, "Finland", &[]),
    Country::new("FJ", "FJI", 242, "Fiji", &[]),
    Country::new("FK", "FLK", 238, "Falkland Islands (Malvinas)", &[]),
    Country::new("FR", "FRA", 250, "France", &[]),
    Country::new("FO", "FRO", 234, "Faroe Islands", &[]),
    Country::new("FM", "FSM", 583, "Micronesia, Federated States of", &["Micronesia"]),
    Country::new("GA", "GAB", 266, "Gabon", &[]),
    Country::new("GB", "GBR", 826, "United Kingdom", &["United Kingdom of Great Britain and Northern Ireland"]),
    Country::new("GE", "GEO", 268, "Georgia", &[]),
    Country::new("GG", "GGY", 831, "Guernsey", &[]),
    Country::new("GH", "GHA", 288, "Ghana", &[]),
    Country::new("GI", "GIB", 292, "Gibraltar", &[]),
    Country::new("GN", "GIN", 324, "Guinea", &[]),
    Country::new("GP", "GLP", 312, "Guadeloupe", &[]),
    Country::new("GM", "GMB", 270, "Gambia", &[]),
    Country::new("GW", "GNB", 624, "Guinea-Bissau", &[]),
    Country::new("GQ", "GNQ", 226, "Equatorial Guinea", &[]),
    Country::new("GR", "GRC", 300, "Greece", &[]),
    Country::new("GD", "GRD", 308, "Grenada", &[]),
    Country::new("GL", "GRL", 304, "Greenland", &[]),
    Country::new("GT", "GTM", 320, "Guatemala", &[]),
    Country::new("GF", "GUF", 254, "French Guiana", &[]),
    Country::new("GU", "GUM", 316, "Guam", &[]),
    Country::new("GY", "GUY", 328, "Guyana", &[]),
    Country::new("HK", "HKG", 344, "Hong Kong", &[]),
    Country::new("HM", "HMD", 334, "Heard Island and McDonald Islands", &[]),
    Country::new("HN", "HND", 340, "Honduras", &[]),
    Country::new("HR", "HRV", 191, "Croatia", &[]),
    Country::new("HT", "HTI", 332, "Haiti", &[]),
    Country::new("HU", "HUN", 348, "Hungary", &[]),
    Country::new("ID", "IDN", 360, "Indonesia", &[]),
    Country::new("IM", "IMN", 833, "Isle of Man", &[]),
    Country::new("IN", "IND", 356, "India", &[]),
    Country::new("IO", "IOT", 86, "British Indian Ocean Territory", &[]),
    Country::new("IE", "IRL", 372, "Ireland", &[]),
    Country::new("IR", "IRN", 364, "Iran, Islamic Republic of", &["Iran"]),
    Country::new("IQ", "IRQ", 368, "Iraq", &[]),
    Country::new("IS", "ISL", 352, "Iceland", &[]),
    Country::new("IL", "ISR", 376, "Israel", &[]),
    Country::new("IT", "ITA", 380, "Italy", &[]),
    Country::new("JM", "JAM", 388, "Jamaica", &[]),
    Country::new("JE", "JEY", 832, "Jersey", &[]),
    Country::new("JO", "JOR", 400, "Jordan", &[]),
    Country::new("JP", "JPN", 392, "Japan", &[]),
    Country::new("KZ", "KAZ", 398, "Kazakhstan", &[]),
    Country::new("KE", "KEN", 404, "Kenya", &[]),
    Country::new("KG", "KGZ", 417, "Kyrgyzstan", &[]),
    Country::new("KH", "KHM", 116, "Cambodia", &[]),
    Country::new("KI", "KIR", 296, "Kiribati", &[]),
    Country::new("KN", "KNA", 659, "Saint Kitts and Nevis", &[]),
    Country::new("KR", "KOR", 410, "Korea, Republic of", &["South Korea"]),
    Country::new("KW", "KWT", 414, "Kuwait", &[]),
    Country::new("LA", "LAO", 418, "Lao People's Democratic Republic", &["Laos"]),
    Country::new("LB", "LBN", 422, "Lebanon", &[]),
    Country::new("LR", "LBR", 430, "Liberia", &[]),
    Country::new("LY", "LBY", 434, "Libya", &[]),
    Country::new("LC", "LCA", 662, "Saint Lucia", &[]),
    Country::new("LI", "LIE", 438, "Liechtenstein", &[]),
    Country::new("LK", "LKA", 144, "Sri Lanka", &[]),
    Country::new("LS", "LSO", 426, "Lesotho", &[]),
    Country::new("LT", "LTU", 440, "Lithuania", &[]),
    Country::new("LU", "LUX", 442, "Luxembourg", &[]),
    Country::new("LV", "LVA", 428, "Latvia", &[]),
    Country::new("MO", "MAC", 446, "Macao", &["Macau"]),
    Country::new("MF", "MAF", 663, "Saint Martin (French part)", &[]),
    Country::new("MA", "MAR", 504, "Morocco", &[]),
    Country::new("MC", "MCO", 492, "Monaco", &[]),
    Country::new("MD", "MDA", 498, "Moldova, Republic of", &["Moldova"]),
    Country::new("MG", "MDG", 450, "Madagascar", &[]),
    Country::new("MV", "MDV", 462, "Maldives", &[]),
    Country::new("MX", "MEX", 484, "Mexico", &[]),
    Country::new("MH", "MHL", 584, "Marshall Islands", &[]),
    Country::new("MK", "MKD", 807, "North Macedonia", &["Macedonia, Republic of"]),
    Country::new("ML", "MLI", 466, "Mali", &[]),
    Country::new("MT", "MLT", 470, "Malta", &[]),
    Country::new("MM", "MMR", 104, "Myanmar", &[]),
    Country::new("ME", "MNE", 499, "Montenegro", &[]),
    Country::new("MN", "MNG", 496, "Mongolia", &[]),
    Country::new("MP", "MNP", 580, "Northern Mariana Islands", &[]),
    Country::new("MZ", "MOZ", 508, "Mozambique", &[]),
    Country::new("MR", "MRT", 478, "Mauritania", &[]),
    Country::new("MS", "MSR", 500, "Montserrat", &[]),
    Country::new("MQ", "MTQ", 474, "Martinique", &[]),
    Country::new("MU", "MUS", 480, "Mauritius", &[]),
    Country::new("MW", "MWI", 454, "Malawi", &[]),
    Country::new("MY", "MYS", 458, "Malaysia", &[]),
    Country::new("YT", "MYT", 175, "Mayotte", &[]),
    Country::new("NA", "NAM", 516, "Namibia", &[]),
    Country::new("NC", "NCL", 540, "New Caledonia", &[]),
    Country::new("NE", "NER", 562, "Niger", &[]),
    Country::new("NF", "NFK", 574, "Norfolk Island", &[]),
    Country::new("NG", "NGA", 566, "Nigeria", &[]),
    Country::new("NI", "NIC", 558, "Nicaragua", &[]),
    Country::new("NU", "NIU", 570, "Niue", &[]),
    Country::new("NL", "NLD", 528, "Netherlands", &["Netherlands, Kingdom of the"]),
    Country::new("NO", "NOR", 578, "Norway", &[]),
    Country::new("NP", "NPL", 524, "Nepal", &[]),
    Country::new("NR", "NRU", 520, "Nauru", &[]),
    Country::new("NZ", "NZL", 554, "New Zealand", &[]),
    Country::new("OM", "OMN", 512, "Oman", &[]),
    Country::new("PK", "PAK", 586, "Pakistan", &[]),
    Country::new("PA", "PAN", 591, "Panama", &[]),
    Country::new("PN", "PCN", 612, "Pitcairn", &[]),
    Country::new("PE", "PER", 604, "Peru", &[]),
    Country::new("PH", "PHL", 608, "Philippines", &[]),
    Country::new("PW", "PLW", 585, "Palau", &[]),
    Country::new("PG", "PNG", 598, "Papua New Guinea", &[]),
    Country::new("PL", "POL", 616, "Poland", &[]),
    Country::new("PR", "PRI", 630, "Puerto Rico", &[]),
    Country::new("KP", "PRK", 408, "Korea, Democratic People's Republic of", &["North Korea"]),
    Country::new("PT", "PRT", 620, "Portugal", &[]),
    Country::new("PY", "PRY", 600, "Paraguay", &[]),
    Country::new("PS", "PSE", 275, "Palestine, State of", &["Palestine"]),
    Country::new("PF", "PYF", 258, "French Polynesia", &[]),
    Country::new("QA", "QAT", 634, "Qatar", &[]),
    Country::new("RE", "REU", 638, "Réunion", &[]),
    Country::new("RO", "ROU", 642, "Romania", &[]),
    Country::new("RU", "RUS", 643, "Russian Federation", &["Russia"]),
    Country::new("RW", "RWA", 646, "Rwanda", &[]),
    Country::new("SA", "SAU", 682, "Saudi Arabia", &[]),
    Country::new("SD", "SDN", 729, "Sudan", &[]),
    Country::new("SN", "SEN", 686, "Senegal", &[]),
    Country::new("SG", "SGP", 702, "Singapore", &[]),
    Country::new("GS", "SGS", 239, "South Georgia and the South Sandwich Islands", &[]),
    Country::new("SH", "SHN", 654, "Saint Helena, Ascension and Tristan da Cunha", &[]),
    Country::new("SJ", "SJM", 744, "Svalbard and Jan Mayen", &[]),
    Country::new("SB", "SLB", 90, "Solomon Islands", &[]),
    Country::new("SL", "SLE", 694, "Sierra Leone", &[]),
    Country::new("SV", "SLV", 222, "El Salvador", &[]),
    Country::new("SM", "SMR", 674, "San Marino", &[]),
    Country::new("SO", "SOM", 706, "Somalia", &[]),
    Country::new("PM", "SPM", 666, "Saint Pierre and Miquelon", &[]),
    Country::new("RS", "SRB", 688, "Serbia", &[]),
    Country::new("SS", "SSD", 728, "South Sudan", &[]),
    Country::new("ST", "STP", 678, "Sao Tome and Principe", &[]),
    Country::new("SR", "SUR", 740, "Suriname", &[]),
    Country::new("SK", "SVK", 703, "Slovakia", &[]),
    Country::new("SI", "SVN", 705, "Slovenia", &[]),
    Country::new("SE", "SWE", 752, "Sweden", &[]),
    Country::new("SZ", "SWZ", 748, "Eswatini", &["Swaziland"]),
    Country::new("SX", "SXM", 534, "Sint Maarten (Dutch part)", &[]),
    Country::new("SC", "SYC", 690, "Seychelles", &[]),
    Country::new("SY", "SYR", 760, "Syrian Arab Republic", &["Syria"]),
    Country::new("TC", "TCA", 796, "Turks and Caicos Islands", &[]),
    Country::new("TD", "TCD", 148, "Chad", &[]),
    Country::new("TG", "TGO", 768, "Togo", &[]),
    Country::new("TH", "THA", 764, "Thailand", &[]),
    Country::new("TJ", "TJK", 762, "Tajikistan", &[]),
    Country::new("TK", "TKL", 772, "Tokelau", &[]),
    Country::new("TM", "TKM", 795, "Turkmenistan", &[]),
    Country::new("TL", "TLS", 626, "Timor-Leste", &[]),
    Country::new("TO", "TON", 776, "Tonga", &[]),
    Country::new("TT", "TTO", 780, "Trinidad and Tobago", &[]),
    Country::new("TN", "TUN", 788, "Tunisia", &[]),
    Country::new("TR", "TUR", 792, "Türkiye", &["Turkey"]),
    Country::new("TV", "TUV", 798, "Tuvalu", &[]),
    Country::new("TW", "TWN", 158, "Taiwan, Province of China", &["Taiwan"]),
    Country::new("TZ", "TZA", 834, "Tanzania, United Republic of", &["Tanzania"]),
    Country::new("UG", "UGA", 800, "Uganda", &[]),
    Country::new("UA", "UKR", 804, "Ukraine", &[]),
    Country::new("UM", "UMI", 581, "United States Minor Outlying Islands", &[]),
    Country::new("UY", "URY", 858, "Uruguay", &[]),
    Country::new("US", "USA", 840, "United States", &["United States of America"]),
    Country::new("UZ", "UZB", 860, "Uzbekistan", &[]),
    Country::new("VA", "VAT", 336, "Holy See (Vatican City State)", &["Vatican City"]),
    Country::new("VC", "VCT", 670, "Saint Vincent and the Grenadines", &[]),
    Country::new("VE", "VEN", 862, "Venezuela, Bolivarian Republic of", &["Venezuela"]),
    Country::new("VG", "VGB", 92, "Virgin Islands, British", &[]),
    Country::new("VI", "VIR", 850, "Virgin Islands, U.S.", &[]),
    Country::new("VN", "VNM", 704, "Viet Nam", &["Vietnam"]),
    Country::new("VU", "VUT", 548, "Vanuatu", &[]),
    Country::new("WF", "WLF", 876, "Wallis and Futuna", &[]),
    Country::new("WS", "WSM", 882, "Samoa", &[]),
    Country::new("YE", "YEM", 887, "Yemen", &[]),
    Country::new("ZA", "ZAF", 710, "South Africa", &[]),
    Country::new("ZM", "ZMB", 894, "Zambia", &[]),
    Country::new("ZW", "ZWE", 716, "Zimbabwe", &[]),
];
