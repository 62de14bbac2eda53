//! Built-in ISO 3166-1 country table
//!
//! Columns: alpha-2 code, alpha-3 code, short name, alternate names (official
//! and common forms).

pub(crate) const ISO_COUNTRIES: &[(&str, &str, &str, &[&str])] = &[
    ("AF", "AFG", "Afghanistan", &["Islamic Republic of Afghanistan"]),
    ("AX", "ALA", "Åland Islands", &["Aland Islands"]),
    ("AL", "ALB", "Albania", &["Republic of Albania"]),
    ("DZ", "DZA", "Algeria", &["People's Democratic Republic of Algeria"]),
    ("AS", "ASM", "American Samoa", &[]),
    ("AD", "AND", "Andorra", &["Principality of Andorra"]),
    ("AO", "AGO", "Angola", &["Republic of Angola"]),
    ("AI", "AIA", "Anguilla", &[]),
    ("AQ", "ATA", "Antarctica", &[]),
    ("AG", "ATG", "Antigua and Barbuda", &[]),
    ("AR", "ARG", "Argentina", &["Argentine Republic"]),
    ("AM", "ARM", "Armenia", &["Republic of Armenia"]),
    ("AW", "ABW", "Aruba", &[]),
    ("AU", "AUS", "Australia", &["Commonwealth of Australia"]),
    ("AT", "AUT", "Austria", &["Republic of Austria"]),
    ("AZ", "AZE", "Azerbaijan", &["Republic of Azerbaijan"]),
    ("BS", "BHS", "Bahamas", &["Commonwealth of the Bahamas", "The Bahamas"]),
    ("BH", "BHR", "Bahrain", &["Kingdom of Bahrain"]),
    ("BD", "BGD", "Bangladesh", &["People's Republic of Bangladesh"]),
    ("BB", "BRB", "Barbados", &[]),
    ("BY", "BLR", "Belarus", &["Republic of Belarus"]),
    ("BE", "BEL", "Belgium", &["Kingdom of Belgium"]),
    ("BZ", "BLZ", "Belize", &[]),
    ("BJ", "BEN", "Benin", &["Republic of Benin"]),
    ("BM", "BMU", "Bermuda", &[]),
    ("BT", "BTN", "Bhutan", &["Kingdom of Bhutan"]),
    ("BO", "BOL", "Bolivia, Plurinational State of", &["Bolivia", "Plurinational State of Bolivia"]),
    ("BQ", "BES", "Bonaire, Sint Eustatius and Saba", &[]),
    ("BA", "BIH", "Bosnia and Herzegovina", &["Republic of Bosnia and Herzegovina"]),
    ("BW", "BWA", "Botswana", &["Republic of Botswana"]),
    ("BV", "BVT", "Bouvet Island", &[]),
    ("BR", "BRA", "Brazil", &["Federative Republic of Brazil"]),
    ("IO", "IOT", "British Indian Ocean Territory", &[]),
    ("BN", "BRN", "Brunei Darussalam", &["Brunei"]),
    ("BG", "BGR", "Bulgaria", &["Republic of Bulgaria"]),
    ("BF", "BFA", "Burkina Faso", &[]),
    ("BI", "BDI", "Burundi", &["Republic of Burundi"]),
    ("CV", "CPV", "Cabo Verde", &["Cape Verde", "Republic of Cabo Verde"]),
    ("KH", "KHM", "Cambodia", &["Kingdom of Cambodia"]),
    ("CM", "CMR", "Cameroon", &["Republic of Cameroon"]),
    ("CA", "CAN", "Canada", &[]),
    ("KY", "CYM", "Cayman Islands", &[]),
    ("CF", "CAF", "Central African Republic", &[]),
    ("TD", "TCD", "Chad", &["Republic of Chad"]),
    ("CL", "CHL", "Chile", &["Republic of Chile"]),
    ("CN", "CHN", "China", &["People's Republic of China"]),
    ("CX", "CXR", "Christmas Island", &[]),
    ("CC", "CCK", "Cocos (Keeling) Islands", &[]),
    ("CO", "COL", "Colombia", &["Republic of Colombia"]),
    ("KM", "COM", "Comoros", &["Union of the Comoros"]),
    ("CG", "COG", "Congo", &["Republic of the Congo"]),
    ("CD", "COD", "Congo, The Democratic Republic of the", &["Democratic Republic of the Congo"]),
    ("CK", "COK", "Cook Islands", &[]),
    ("CR", "CRI", "Costa Rica", &["Republic of Costa Rica"]),
    ("CI", "CIV", "Côte d'Ivoire", &["Cote d'Ivoire", "Ivory Coast", "Republic of Côte d'Ivoire"]),
    ("HR", "HRV", "Croatia", &["Republic of Croatia"]),
    ("CU", "CUB", "Cuba", &["Republic of Cuba"]),
    ("CW", "CUW", "Curaçao", &["Curacao"]),
    ("CY", "CYP", "Cyprus", &["Republic of Cyprus"]),
    ("CZ", "CZE", "Czechia", &["Czech Republic"]),
    ("DK", "DNK", "Denmark", &["Kingdom of Denmark"]),
    ("DJ", "DJI", "Djibouti", &["Republic of Djibouti"]),
    ("DM", "DMA", "Dominica", &["Commonwealth of Dominica"]),
    ("DO", "DOM", "Dominican Republic", &[]),
    ("EC", "ECU", "Ecuador", &["Republic of Ecuador"]),
    ("EG", "EGY", "Egypt", &["Arab Republic of Egypt"]),
    ("SV", "SLV", "El Salvador", &["Republic of El Salvador"]),
    ("GQ", "GNQ", "Equatorial Guinea", &["Republic of Equatorial Guinea"]),
    ("ER", "ERI", "Eritrea", &["the State of Eritrea"]),
    ("EE", "EST", "Estonia", &["Republic of Estonia"]),
    ("SZ", "SWZ", "Eswatini", &["Kingdom of Eswatini", "Swaziland"]),
    ("ET", "ETH", "Ethiopia", &["Federal Democratic Republic of Ethiopia"]),
    ("FK", "FLK", "Falkland Islands (Malvinas)", &["Falkland Islands"]),
    ("FO", "FRO", "Faroe Islands", &[]),
    ("FJ", "FJI", "Fiji", &["Republic of Fiji"]),
    ("FI", "FIN", "Finland", &["Republic of Finland"]),
    ("FR", "FRA", "France", &["French Republic"]),
    ("GF", "GUF", "French Guiana", &[]),
    ("PF", "PYF", "French Polynesia", &[]),
    ("TF", "ATF", "French Southern Territories", &[]),
    ("GA", "GAB", "Gabon", &["Gabonese Republic"]),
    ("GM", "GMB", "Gambia", &["Republic of the Gambia", "The Gambia"]),
    ("GE", "GEO", "Georgia", &[]),
    ("DE", "DEU", "Germany", &["Federal Republic of Germany"]),
    ("GH", "GHA", "Ghana", &["Republic of Ghana"]),
    ("GI", "GIB", "Gibraltar", &[]),
    ("GR", "GRC", "Greece", &["Hellenic Republic"]),
    ("GL", "GRL", "Greenland", &[]),
    ("GD", "GRD", "Grenada", &[]),
    ("GP", "GLP", "Guadeloupe", &[]),
    ("GU", "GUM", "Guam", &[]),
    ("GT", "GTM", "Guatemala", &["Republic of Guatemala"]),
    ("GG", "GGY", "Guernsey", &[]),
    ("GN", "GIN", "Guinea", &["Republic of Guinea"]),
    ("GW", "GNB", "Guinea-Bissau", &["Republic of Guinea-Bissau"]),
    ("GY", "GUY", "Guyana", &["Republic of Guyana"]),
    ("HT", "HTI", "Haiti", &["Republic of Haiti"]),
    ("HM", "HMD", "Heard Island and McDonald Islands", &[]),
    ("VA", "VAT", "Holy See (Vatican City State)", &["Vatican", "Vatican City"]),
    ("HN", "HND", "Honduras", &["Republic of Honduras"]),
    ("HK", "HKG", "Hong Kong", &["Hong Kong Special Administrative Region of China"]),
    ("HU", "HUN", "Hungary", &[]),
    ("IS", "ISL", "Iceland", &["Republic of Iceland"]),
    ("IN", "IND", "India", &["Republic of India"]),
    ("ID", "IDN", "Indonesia", &["Republic of Indonesia"]),
    ("IR", "IRN", "Iran, Islamic Republic of", &["Iran", "Islamic Republic of Iran"]),
    ("IQ", "IRQ", "Iraq", &["Republic of Iraq"]),
    ("IE", "IRL", "Ireland", &[]),
    ("IM", "IMN", "Isle of Man", &[]),
    ("IL", "ISR", "Israel", &["State of Israel"]),
    ("IT", "ITA", "Italy", &["Italian Republic"]),
    ("JM", "JAM", "Jamaica", &[]),
    ("JP", "JPN", "Japan", &[]),
    ("JE", "JEY", "Jersey", &[]),
    ("JO", "JOR", "Jordan", &["Hashemite Kingdom of Jordan"]),
    ("KZ", "KAZ", "Kazakhstan", &["Republic of Kazakhstan"]),
    ("KE", "KEN", "Kenya", &["Republic of Kenya"]),
    ("KI", "KIR", "Kiribati", &["Republic of Kiribati"]),
    ("KP", "PRK", "Korea, Democratic People's Republic of", &["North Korea", "Democratic People's Republic of Korea"]),
    ("KR", "KOR", "Korea, Republic of", &["South Korea", "Republic of Korea"]),
    ("KW", "KWT", "Kuwait", &["State of Kuwait"]),
    ("KG", "KGZ", "Kyrgyzstan", &["Kyrgyz Republic"]),
    ("LA", "LAO", "Lao People's Democratic Republic", &["Laos"]),
    ("LV", "LVA", "Latvia", &["Republic of Latvia"]),
    ("LB", "LBN", "Lebanon", &["Lebanese Republic"]),
    ("LS", "LSO", "Lesotho", &["Kingdom of Lesotho"]),
    ("LR", "LBR", "Liberia", &["Republic of Liberia"]),
    ("LY", "LBY", "Libya", &["State of Libya"]),
    ("LI", "LIE", "Liechtenstein", &["Principality of Liechtenstein"]),
    ("LT", "LTU", "Lithuania", &["Republic of Lithuania"]),
    ("LU", "LUX", "Luxembourg", &["Grand Duchy of Luxembourg"]),
    ("MO", "MAC", "Macao", &["Macau", "Macao Special Administrative Region of China"]),
    ("MG", "MDG", "Madagascar", &["Republic of Madagascar"]),
    ("MW", "MWI", "Malawi", &["Republic of Malawi"]),
    ("MY", "MYS", "Malaysia", &[]),
    ("MV", "MDV", "Maldives", &["Republic of Maldives"]),
    ("ML", "MLI", "Mali", &["Republic of Mali"]),
    ("MT", "MLT", "Malta", &["Republic of Malta"]),
    ("MH", "MHL", "Marshall Islands", &["Republic of the Marshall Islands"]),
    ("MQ", "MTQ", "Martinique", &[]),
    ("MR", "MRT", "Mauritania", &["Islamic Republic of Mauritania"]),
    ("MU", "MUS", "Mauritius", &["Republic of Mauritius"]),
    ("YT", "MYT", "Mayotte", &[]),
    ("MX", "MEX", "Mexico", &["United Mexican States"]),
    ("FM", "FSM", "Micronesia, Federated States of", &["Micronesia", "Federated States of Micronesia"]),
    ("MD", "MDA", "Moldova, Republic of", &["Moldova", "Republic of Moldova"]),
    ("MC", "MCO", "Monaco", &["Principality of Monaco"]),
    ("MN", "MNG", "Mongolia", &[]),
    ("ME", "MNE", "Montenegro", &[]),
    ("MS", "MSR", "Montserrat", &[]),
    ("MA", "MAR", "Morocco", &["Kingdom of Morocco"]),
    ("MZ", "MOZ", "Mozambique", &["Republic of Mozambique"]),
    ("MM", "MMR", "Myanmar", &["Republic of Myanmar", "Burma"]),
    ("NA", "NAM", "Namibia", &["Republic of Namibia"]),
    ("NR", "NRU", "Nauru", &["Republic of Nauru"]),
    ("NP", "NPL", "Nepal", &["Federal Democratic Republic of Nepal"]),
    ("NL", "NLD", "Netherlands", &["Kingdom of the Netherlands", "Holland"]),
    ("NC", "NCL", "New Caledonia", &[]),
    ("NZ", "NZL", "New Zealand", &[]),
    ("NI", "NIC", "Nicaragua", &["Republic of Nicaragua"]),
    ("NE", "NER", "Niger", &["Republic of the Niger"]),
    ("NG", "NGA", "Nigeria", &["Federal Republic of Nigeria"]),
    ("NU", "NIU", "Niue", &[]),
    ("NF", "NFK", "Norfolk Island", &[]),
    ("MK", "MKD", "North Macedonia", &["Republic of North Macedonia", "Macedonia"]),
    ("MP", "MNP", "Northern Mariana Islands", &["Commonwealth of the Northern Mariana Islands"]),
    ("NO", "NOR", "Norway", &["Kingdom of Norway"]),
    ("OM", "OMN", "Oman", &["Sultanate of Oman"]),
    ("PK", "PAK", "Pakistan", &["Islamic Republic of Pakistan"]),
    ("PW", "PLW", "Palau", &["Republic of Palau"]),
    ("PS", "PSE", "Palestine, State of", &["Palestine", "the State of Palestine"]),
    ("PA", "PAN", "Panama", &["Republic of Panama"]),
    ("PG", "PNG", "Papua New Guinea", &["Independent State of Papua New Guinea"]),
    ("PY", "PRY", "Paraguay", &["Republic of Paraguay"]),
    ("PE", "PER", "Peru", &["Republic of Peru"]),
    ("PH", "PHL", "Philippines", &["Republic of the Philippines"]),
    ("PN", "PCN", "Pitcairn", &[]),
    ("PL", "POL", "Poland", &["Republic of Poland"]),
    ("PT", "PRT", "Portugal", &["Portuguese Republic"]),
    ("PR", "PRI", "Puerto Rico", &[]),
    ("QA", "QAT", "Qatar", &["State of Qatar"]),
    ("RE", "REU", "Réunion", &["Reunion"]),
    ("RO", "ROU", "Romania", &[]),
    ("RU", "RUS", "Russian Federation", &["Russia"]),
    ("RW", "RWA", "Rwanda", &["Rwandese Republic"]),
    ("BL", "BLM", "Saint Barthélemy", &["Saint Barthelemy"]),
    ("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", &["Saint Helena"]),
    ("KN", "KNA", "Saint Kitts and Nevis", &[]),
    ("LC", "LCA", "Saint Lucia", &[]),
    ("MF", "MAF", "Saint Martin (French part)", &["Saint Martin"]),
    ("PM", "SPM", "Saint Pierre and Miquelon", &[]),
    ("VC", "VCT", "Saint Vincent and the Grenadines", &[]),
    ("WS", "WSM", "Samoa", &["Independent State of Samoa"]),
    ("SM", "SMR", "San Marino", &["Republic of San Marino"]),
    ("ST", "STP", "Sao Tome and Principe", &["Democratic Republic of Sao Tome and Principe"]),
    ("SA", "SAU", "Saudi Arabia", &["Kingdom of Saudi Arabia"]),
    ("SN", "SEN", "Senegal", &["Republic of Senegal"]),
    ("RS", "SRB", "Serbia", &["Republic of Serbia"]),
    ("SC", "SYC", "Seychelles", &["Republic of Seychelles"]),
    ("SL", "SLE", "Sierra Leone", &["Republic of Sierra Leone"]),
    ("SG", "SGP", "Singapore", &["Republic of Singapore"]),
    ("SX", "SXM", "Sint Maarten (Dutch part)", &["Sint Maarten"]),
    ("SK", "SVK", "Slovakia", &["Slovak Republic"]),
    ("SI", "SVN", "Slovenia", &["Republic of Slovenia"]),
    ("SB", "SLB", "Solomon Islands", &[]),
    ("SO", "SOM", "Somalia", &["Federal Republic of Somalia"]),
    ("ZA", "ZAF", "South Africa", &["Republic of South Africa"]),
    ("GS", "SGS", "South Georgia and the South Sandwich Islands", &[]),
    ("SS", "SSD", "South Sudan", &["Republic of South Sudan"]),
    ("ES", "ESP", "Spain", &["Kingdom of Spain"]),
    ("LK", "LKA", "Sri Lanka", &["Democratic Socialist Republic of Sri Lanka"]),
    ("SD", "SDN", "Sudan", &["Republic of the Sudan"]),
    ("SR", "SUR", "Suriname", &["Republic of Suriname"]),
    ("SJ", "SJM", "Svalbard and Jan Mayen", &[]),
    ("SE", "SWE", "Sweden", &["Kingdom of Sweden"]),
    ("CH", "CHE", "Switzerland", &["Swiss Confederation"]),
    ("SY", "SYR", "Syrian Arab Republic", &["Syria"]),
    ("TW", "TWN", "Taiwan, Province of China", &["Taiwan"]),
    ("TJ", "TJK", "Tajikistan", &["Republic of Tajikistan"]),
    ("TZ", "TZA", "Tanzania, United Republic of", &["Tanzania", "United Republic of Tanzania"]),
    ("TH", "THA", "Thailand", &["Kingdom of Thailand"]),
    ("TL", "TLS", "Timor-Leste", &["Democratic Republic of Timor-Leste", "East Timor"]),
    ("TG", "TGO", "Togo", &["Togolese Republic"]),
    ("TK", "TKL", "Tokelau", &[]),
    ("TO", "TON", "Tonga", &["Kingdom of Tonga"]),
    ("TT", "TTO", "Trinidad and Tobago", &["Republic of Trinidad and Tobago"]),
    ("TN", "TUN", "Tunisia", &["Republic of Tunisia"]),
    ("TR", "TUR", "Türkiye", &["Turkey", "Republic of Türkiye"]),
    ("TM", "TKM", "Turkmenistan", &[]),
    ("TC", "TCA", "Turks and Caicos Islands", &[]),
    ("TV", "TUV", "Tuvalu", &[]),
    ("UG", "UGA", "Uganda", &["Republic of Uganda"]),
    ("UA", "UKR", "Ukraine", &[]),
    ("AE", "ARE", "United Arab Emirates", &[]),
    ("GB", "GBR", "United Kingdom", &["United Kingdom of Great Britain and Northern Ireland", "Great Britain", "UK"]),
    ("US", "USA", "United States", &["United States of America", "USA"]),
    ("UM", "UMI", "United States Minor Outlying Islands", &[]),
    ("UY", "URY", "Uruguay", &["Eastern Republic of Uruguay"]),
    ("UZ", "UZB", "Uzbekistan", &["Republic of Uzbekistan"]),
    ("VU", "VUT", "Vanuatu", &["Republic of Vanuatu"]),
    ("VE", "VEN", "Venezuela, Bolivarian Republic of", &["Venezuela", "Bolivarian Republic of Venezuela"]),
    ("VN", "VNM", "Viet Nam", &["Vietnam", "Socialist Republic of Viet Nam"]),
    ("VG", "VGB", "Virgin Islands, British", &["British Virgin Islands"]),
    ("VI", "VIR", "Virgin Islands, U.S.", &["Virgin Islands of the United States"]),
    ("WF", "WLF", "Wallis and Futuna", &[]),
    ("EH", "ESH", "Western Sahara", &[]),
    ("YE", "YEM", "Yemen", &["Republic of Yemen"]),
    ("ZM", "ZMB", "Zambia", &["Republic of Zambia"]),
    ("ZW", "ZWE", "Zimbabwe", &["Republic of Zimbabwe"]),
];
