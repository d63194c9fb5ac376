//! Country sub-regions with EPSG:3035 bounding boxes `[x_min, y_min, x_max, y_max]`.

use super::{Country, Region};

pub(super) const COUNTRIES: &[Country] = &[
    Country {
        name: "Austria",
        bbox: [4284800, 2584400, 4843900, 2904000],
        regions: &[
            Region { name: "Vienna", bbox: [4780900, 2797500, 4808300, 2822800] },
            Region { name: "Lower Austria", bbox: [4657000, 2711000, 4837300, 2903400] },
            Region { name: "Upper Austria", bbox: [4528400, 2709100, 4687700, 2863500] },
            Region { name: "Styria", bbox: [4594000, 2617000, 4783000, 2766000] },
            Region { name: "Tyrol", bbox: [4328500, 2615300, 4543500, 2741000] },
            Region { name: "Carinthia", bbox: [4525000, 2588000, 4706000, 2682000] },
            Region { name: "Salzburg", bbox: [4479000, 2650000, 4619000, 2778000] },
            Region { name: "Vorarlberg", bbox: [4285000, 2636000, 4339000, 2721000] },
            Region { name: "Burgenland", bbox: [4778000, 2653000, 4854000, 2805000] },
            Region { name: "Graz Metro", bbox: [4727700, 2670000, 4740700, 2684700] },
        ],
    },
    Country {
        name: "Belgium",
        bbox: [3770000, 2960000, 4072000, 3167000],
        regions: &[
            Region { name: "Brussels", bbox: [3915400, 3088400, 3933400, 3103800] },
            Region { name: "Flanders", bbox: [3792000, 3092000, 4036500, 3162400] },
            Region { name: "Wallonia", bbox: [3760000, 2960000, 4000000, 3180000] },
            Region { name: "Antwerp", bbox: [3912300, 3113900, 3992300, 3165600] },
            Region { name: "Ghent", bbox: [3878500, 3105000, 3920000, 3140000] },
            Region { name: "Liège", bbox: [3990000, 3070000, 4030000, 3140000] },
            Region { name: "Charleroi", bbox: [3865000, 3033000, 3905000, 3095000] },
            Region { name: "Namur", bbox: [3800000, 3000000, 3840000, 3070000] },
            Region { name: "Limburg Region", bbox: [3945000, 3120000, 4000000, 3180000] },
            Region { name: "Brabant Wallon", bbox: [3810000, 3025000, 3850000, 3095000] },
        ],
    },
    Country {
        name: "Bulgaria",
        bbox: [5356000, 2099000, 5816000, 2536000],
        regions: &[
            Region { name: "Sofia", bbox: [5409500, 2260000, 5450000, 2323000] },
            Region { name: "Plovdiv", bbox: [5535500, 2195000, 5575000, 2235000] },
            Region { name: "Varna", bbox: [5765000, 2360000, 5805000, 2400000] },
            Region { name: "Burgas", bbox: [5685000, 2225000, 5725000, 2265000] },
            Region { name: "Dobrich region", bbox: [5860000, 2400000, 5910000, 2440000] },
            Region { name: "Veliko Tarnovo", bbox: [5590000, 2380000, 5630000, 2420000] },
            Region { name: "Ruse", bbox: [5725000, 2420000, 5760000, 2460000] },
            Region { name: "Stara Zagora", bbox: [5630000, 2170000, 5670000, 2210000] },
            Region { name: "Blagoevgrad", bbox: [5480000, 2150000, 5520000, 2190000] },
            Region { name: "Botevgrad", bbox: [5540000, 2280000, 5580000, 2320000] },
        ],
    },
    Country {
        name: "Croatia",
        bbox: [4587000, 2124000, 5044000, 2651000],
        regions: &[
            Region { name: "Zagreb", bbox: [4790000, 2570000, 4830000, 2610000] },
            Region { name: "Istria", bbox: [4640000, 2500000, 4700000, 2570000] },
            Region { name: "Split", bbox: [4900000, 2380000, 4940000, 2425000] },
            Region { name: "Dalmatia", bbox: [4850000, 2300000, 4980000, 2450000] },
            Region { name: "Slavonia", bbox: [4970000, 2620000, 5060000, 2720000] },
            Region { name: "Kvarner", bbox: [4730000, 2420000, 4790000, 2500000] },
            Region { name: "Rijeka", bbox: [4725000, 2460000, 4765000, 2515000] },
            Region { name: "Osijek", bbox: [5020000, 2660000, 5060000, 2700000] },
            Region { name: "Dubrovnik", bbox: [5000000, 2200000, 5040000, 2240000] },
            Region { name: "Zadar", bbox: [4860000, 2390000, 4900000, 2430000] },
        ],
    },
    Country {
        name: "Cyprus",
        bbox: [6357000, 1572000, 6527000, 1761000],
        regions: &[
            Region { name: "Nicosia", bbox: [6430000, 1640000, 6470000, 1670000] },
            Region { name: "Limassol", bbox: [6425000, 1550000, 6460000, 1580000] },
            Region { name: "Larnaca", bbox: [6485000, 1530000, 6525000, 1560000] },
            Region { name: "Paphos", bbox: [6350000, 1490000, 6390000, 1525000] },
            Region { name: "Famagusta", bbox: [6500000, 1630000, 6540000, 1665000] },
            Region { name: "Renewables Zone East", bbox: [6480000, 1590000, 6520000, 1620000] },
            Region { name: "Renewables Zone West", bbox: [6400000, 1550000, 6440000, 1590000] },
            Region { name: "NIC district", bbox: [6430000, 1620000, 6470000, 1650000] },
            Region { name: "LPRO industrial", bbox: [6460000, 1500000, 6500000, 1530000] },
            Region { name: "Limassol port area", bbox: [6425000, 1550000, 6465000, 1580000] },
        ],
    },
    Country {
        name: "Czech Republic",
        bbox: [4475000, 2828000, 4941000, 3143000],
        regions: &[
            Region { name: "Prague", bbox: [4550000, 2920000, 4590000, 2960000] },
            Region { name: "Central Bohemia", bbox: [4510000, 2900000, 4610000, 3000000] },
            Region { name: "Moravia", bbox: [4630000, 2840000, 4800000, 3050000] },
            Region { name: "Brno", bbox: [4640000, 2870000, 4680000, 2900000] },
            Region { name: "Ostrava", bbox: [4710000, 2890000, 4750000, 2930000] },
            Region { name: "Pilsen", bbox: [4470000, 2870000, 4510000, 2910000] },
            Region { name: "Ústí nad Labem", bbox: [4440000, 2960000, 4480000, 3000000] },
            Region { name: "Liberec", bbox: [4500000, 3000000, 4540000, 3040000] },
            Region { name: "Karlovy Vary", bbox: [4450000, 2890000, 4490000, 2930000] },
            Region { name: "South Moravian", bbox: [4620000, 2850000, 4780000, 3060000] },
        ],
    },
    Country {
        name: "Denmark",
        bbox: [4196300, 3496400, 4628200, 3861200],
        regions: &[
            Region { name: "Copenhagen", bbox: [4438800, 3544000, 4641400, 3681100] },
            Region { name: "Zealand", bbox: [4340000, 3565000, 4480000, 3725000] },
            Region { name: "Funen", bbox: [4160000, 3540000, 4260000, 3640000] },
            Region { name: "Jutland", bbox: [3800000, 3600000, 4200000, 4050000] },
            Region { name: "Aarhus", bbox: [4040000, 3800000, 4080000, 3840000] },
            Region { name: "Odense", bbox: [4000000, 3770000, 4040000, 3810000] },
            Region { name: "Aalborg", bbox: [3950000, 3920000, 3990000, 3960000] },
            Region { name: "Fredericia", bbox: [4020000, 3750000, 4050000, 3780000] },
            Region { name: "Esbjerg", bbox: [3970000, 3750000, 4010000, 3790000] },
            Region { name: "Bornholm", bbox: [4320000, 3600000, 4380000, 3650000] },
        ],
    },
    Country {
        name: "Estonia",
        bbox: [5000000, 3877000, 5329000, 4224000],
        regions: &[
            Region { name: "Tallinn", bbox: [5170000, 4390000, 5210000, 4430000] },
            Region { name: "Tartu", bbox: [5300000, 4250000, 5340000, 4290000] },
            Region { name: "Narva", bbox: [5320000, 4400000, 5360000, 4440000] },
            Region { name: "Pärnu", bbox: [5280000, 4230000, 5320000, 4270000] },
            Region { name: "Saaremaa", bbox: [5130000, 4180000, 5190000, 4230000] },
            Region { name: "Harju County", bbox: [5160000, 4380000, 5220000, 4450000] },
            Region { name: "Lääne-Viru", bbox: [5260000, 4360000, 5300000, 4400000] },
            Region { name: "Tartu County", bbox: [5280000, 4240000, 5340000, 4300000] },
            Region { name: "Põlva", bbox: [5320000, 4200000, 5350000, 4235000] },
            Region { name: "Ida-Viru", bbox: [5310000, 4360000, 5350000, 4420000] },
        ],
    },
    Country {
        name: "Finland",
        bbox: [4835000, 4072000, 5136000, 5347000],
        regions: &[
            Region { name: "Helsinki", bbox: [5144800, 4590000, 5185000, 4630000] },
            Region { name: "Espoo", bbox: [5135000, 4590000, 5175000, 4625000] },
            Region { name: "Tampere", bbox: [5000000, 4570000, 5040000, 4610000] },
            Region { name: "Turku", bbox: [4930000, 4530000, 4970000, 4570000] },
            Region { name: "Oulu", bbox: [5060000, 5030000, 5100000, 5070000] },
            Region { name: "Lahti", bbox: [5090000, 4570000, 5130000, 4610000] },
            Region { name: "Kuopio", bbox: [5240000, 4900000, 5280000, 4940000] },
            Region { name: "Jyväskylä", bbox: [5060000, 4720000, 5100000, 4760000] },
            Region { name: "Rovaniemi", bbox: [4930000, 5290000, 4970000, 5330000] },
            Region { name: "Vaasa", bbox: [4835000, 4870000, 4875000, 4910000] },
        ],
    },
    Country {
        name: "France",
        bbox: [3030000, 2150000, 4312000, 3129000],
        regions: &[
            Region { name: "Paris", bbox: [3590000, 2980000, 3630000, 3020000] },
            Region { name: "Île‑de‑France", bbox: [3550000, 2940000, 3650000, 3040000] },
            Region { name: "Auvergne Rhône-Alpes", bbox: [3580000, 2670000, 3860000, 2950000] },
            Region { name: "Occitanie", bbox: [3410000, 2470000, 3720000, 2760000] },
            Region { name: "Provence-Alpes-Côte d’Azur", bbox: [3770000, 2270000, 4030000, 2580000] },
            Region { name: "Brittany", bbox: [3160000, 2860000, 3430000, 3140000] },
            Region { name: "Hauts‑de‑France", bbox: [3530000, 3090000, 3780000, 3290000] },
            Region { name: "Grand Est", bbox: [3660000, 2920000, 3970000, 3180000] },
            Region { name: "Normandy", bbox: [3370000, 2980000, 3660000, 3220000] },
            Region { name: "New Aquitaine", bbox: [3210000, 2660000, 3520000, 2960000] },
        ],
    },
    Country {
        name: "Germany",
        bbox: [4008000, 2692000, 4643000, 3567000],
        regions: &[
            Region { name: "Berlin", bbox: [4545000, 3272000, 4560000, 3295000] },
            Region { name: "North Rhine-Westphalia", bbox: [4026800, 3031700, 4284500, 3269300] },
            Region { name: "Bavaria", bbox: [4340000, 3070000, 4730000, 3450000] },
            Region { name: "Baden-Württemberg", bbox: [4190000, 2980000, 4500000, 3300000] },
            Region { name: "Hesse", bbox: [4310000, 3120000, 4490000, 3290000] },
            Region { name: "Hamburg", bbox: [4430000, 3400000, 4460000, 3435000] },
            Region { name: "Lower Saxony", bbox: [4170000, 3300000, 4460000, 3530000] },
            Region { name: "Saxony", bbox: [4570000, 3180000, 4810000, 3420000] },
            Region { name: "Thuringia", bbox: [4450000, 3110000, 4630000, 3280000] },
            Region { name: "Brandenburg", bbox: [4560000, 3280000, 4800000, 3480000] },
        ],
    },
    Country {
        name: "Greece",
        bbox: [5175000, 1346000, 6040000, 2287000],
        regions: &[
            Region { name: "Athens", bbox: [5526000, 1764000, 5560000, 1798000] },
            Region { name: "Thessaloniki", bbox: [5430000, 1980000, 5470000, 2020000] },
            Region { name: "Crete", bbox: [5520000, 1500000, 5780000, 1670000] },
            Region { name: "Piraeus Port", bbox: [5520000, 1740000, 5550000, 1770000] },
            Region { name: "Peloponnese", bbox: [5360000, 1620000, 5530000, 1790000] },
            Region { name: "Western Macedonia", bbox: [5280000, 1920000, 5450000, 2090000] },
            Region { name: "Central Macedonia", bbox: [5430000, 1940000, 5590000, 2120000] },
            Region { name: "Epirus", bbox: [5190000, 1900000, 5370000, 2080000] },
            Region { name: "Attica Region", bbox: [5500000, 1740000, 5570000, 1830000] },
            Region { name: "Aegean Islands", bbox: [5650000, 1570000, 5830000, 1830000] },
        ],
    },
    Country {
        name: "Hungary",
        bbox: [4796000, 2533000, 5268000, 2914000],
        regions: &[
            Region { name: "Budapest", bbox: [5400000, 2790000, 5440000, 2830000] },
            Region { name: "Central Hungary", bbox: [5380000, 2770000, 5460000, 2850000] },
            Region { name: "Transdanubia", bbox: [5300000, 2730000, 5580000, 2970000] },
            Region { name: "Northern Hungary", bbox: [5400000, 2900000, 5550000, 3050000] },
            Region { name: "Southern Great Plain", bbox: [5480000, 2600000, 5700000, 2850000] },
            Region { name: "Western Transdanubia", bbox: [5300000, 2800000, 5550000, 3000000] },
            Region { name: "Lake Balaton", bbox: [5460000, 2740000, 5530000, 2800000] },
            Region { name: "Győr city", bbox: [5405000, 2870000, 5435000, 2905000] },
            Region { name: "Pécs city", bbox: [5550000, 2710000, 5580000, 2745000] },
            Region { name: "Debrecen", bbox: [5565000, 2860000, 5595000, 2895000] },
        ],
    },
    Country {
        name: "Ireland",
        bbox: [2876000, 3333000, 3344000, 3722000],
        regions: &[
            Region { name: "Dublin", bbox: [2780000, 3770000, 2820000, 3810000] },
            Region { name: "Cork", bbox: [2690000, 3640000, 2730000, 3680000] },
            Region { name: "Galway", bbox: [2670000, 3770000, 2710000, 3820000] },
            Region { name: "Limerick", bbox: [2710000, 3690000, 2750000, 3730000] },
            Region { name: "Waterford", bbox: [2750000, 3610000, 2790000, 3650000] },
            Region { name: "Belfast", bbox: [2795000, 3870000, 2835000, 3915000] },
            Region { name: "Midwest Region", bbox: [2650000, 3720000, 2790000, 3890000] },
            Region { name: "Southwest Region", bbox: [2650000, 3600000, 2800000, 3780000] },
            Region { name: "Dublin Metro", bbox: [2790000, 3780000, 2810000, 3805000] },
            Region { name: "Shannon Estuary", bbox: [2700000, 3650000, 2730000, 3690000] },
        ],
    },
    Country {
        name: "Italy",
        bbox: [4011000, 1366000, 4987000, 2704000],
        regions: &[
            Region { name: "Rome", bbox: [4550000, 1860000, 4590000, 1900000] },
            Region { name: "Milan", bbox: [4490000, 1920000, 4530000, 1960000] },
            Region { name: "Lombardy", bbox: [4440000, 1870000, 4580000, 2020000] },
            Region { name: "Veneto", bbox: [4520000, 1900000, 4660000, 2040000] },
            Region { name: "Tuscany", bbox: [4380000, 1790000, 4520000, 1940000] },
            Region { name: "Sicily", bbox: [4440000, 1360000, 4740000, 1600000] },
            Region { name: "Naples", bbox: [4550000, 1760000, 4590000, 1800000] },
            Region { name: "Emilia‑Romagna", bbox: [4490000, 1940000, 4630000, 2100000] },
            Region { name: "Puglia", bbox: [4620000, 1650000, 4810000, 1850000] },
            Region { name: "Campania", bbox: [4540000, 1720000, 4680000, 1880000] },
        ],
    },
    Country {
        name: "Latvia",
        bbox: [4989000, 3668000, 5386000, 4025000],
        regions: &[
            Region { name: "Riga", bbox: [5470000, 4040000, 5510000, 4080000] },
            Region { name: "Latgale", bbox: [5570000, 3950000, 5690000, 4150000] },
            Region { name: "Kurzeme", bbox: [5190000, 3930000, 5470000, 4150000] },
            Region { name: "Vidzeme", bbox: [5400000, 4050000, 5600000, 4250000] },
            Region { name: "Zemgale", bbox: [5350000, 3980000, 5550000, 4200000] },
            Region { name: "Jelgava", bbox: [5430000, 4000000, 5460000, 4030000] },
            Region { name: "Daugavpils", bbox: [5520000, 3960000, 5550000, 3990000] },
            Region { name: "Ventspils", bbox: [5230000, 4050000, 5260000, 4080000] },
            Region { name: "Liepāja", bbox: [5230000, 4000000, 5260000, 4030000] },
            Region { name: "Valmiera", bbox: [5440000, 4100000, 5480000, 4140000] },
        ],
    },
    Country {
        name: "Lithuania",
        bbox: [5018000, 3472000, 5349000, 3827000],
        regions: &[
            Region { name: "Vilnius", bbox: [5250000, 3810000, 5290000, 3850000] },
            Region { name: "Kaunas", bbox: [5200000, 3790000, 5240000, 3830000] },
            Region { name: "Klaipėda", bbox: [5150000, 3740000, 5190000, 3780000] },
            Region { name: "Šiauliai", bbox: [5230000, 3840000, 5270000, 3880000] },
            Region { name: "Panevėžys", bbox: [5210000, 3830000, 5250000, 3870000] },
            Region { name: "Alytus", bbox: [5220000, 3760000, 5260000, 3800000] },
            Region { name: "Marijampolė", bbox: [5210000, 3770000, 5250000, 3810000] },
            Region { name: "Telšiai", bbox: [5170000, 3860000, 5210000, 3900000] },
            Region { name: "Utena", bbox: [5270000, 3820000, 5310000, 3860000] },
            Region { name: "Visaginas", bbox: [5300000, 3840000, 5340000, 3880000] },
        ],
    },
    Country {
        name: "Luxembourg",
        bbox: [3956000, 2944000, 4040000, 3044000],
        regions: &[
            Region { name: "Luxembourg City", bbox: [3970000, 3030000, 3990000, 3050000] },
            Region { name: "South Luxembourg", bbox: [3956000, 3000000, 3990000, 3040000] },
            Region { name: "North Luxembourg", bbox: [3980000, 3040000, 4020000, 3080000] },
            Region { name: "Région de l'Est", bbox: [3990000, 3010000, 4025000, 3050000] },
            Region { name: "Esch-sur-Alzette", bbox: [3965000, 2990000, 3990000, 3015000] },
            Region { name: "Clervaux", bbox: [3980000, 3060000, 4010000, 3085000] },
            Region { name: "Diekirch", bbox: [3975000, 3040000, 4005000, 3070000] },
            Region { name: "Grevenmacher", bbox: [3995000, 3020000, 4030000, 3045000] },
            Region { name: "Mersch", bbox: [3980000, 3035000, 4005000, 3065000] },
            Region { name: "Remich", bbox: [3995000, 3005000, 4020000, 3030000] },
        ],
    },
    Country {
        name: "Malta",
        bbox: [4680000, 1403000, 4759000, 1483000],
        regions: &[
            Region { name: "Valletta", bbox: [4705000, 1460000, 4715000, 1470000] },
            Region { name: "Marsaxlokk", bbox: [4710000, 1430000, 4720000, 1440000] },
            Region { name: "Birkirkara", bbox: [4700000, 1465000, 4715000, 1480000] },
            Region { name: "Floriana", bbox: [4705000, 1460000, 4710000, 1465000] },
            Region { name: "Zebbug", bbox: [4695000, 1460000, 4705000, 1470000] },
            Region { name: "Rabat", bbox: [4690000, 1470000, 4700000, 1480000] },
            Region { name: "Gozo", bbox: [4675000, 1435000, 4695000, 1455000] },
            Region { name: "Mdina", bbox: [4695000, 1470000, 4700000, 1475000] },
            Region { name: "Sliema", bbox: [4705000, 1465000, 4710000, 1475000] },
            Region { name: "Bżar Solar Park", bbox: [4715000, 1450000, 4720000, 1460000] },
        ],
    },
    Country {
        name: "Netherlands",
        bbox: [3849000, 3092000, 4139000, 3406000],
        regions: &[
            Region { name: "Amsterdam", bbox: [4075000, 3265000, 4115000, 3305000] },
            Region { name: "Rotterdam", bbox: [4040000, 3210000, 4080000, 3250000] },
            Region { name: "The Hague", bbox: [4020000, 3210000, 4060000, 3250000] },
            Region { name: "Utrecht", bbox: [4060000, 3240000, 4100000, 3280000] },
            Region { name: "Eindhoven", bbox: [4110000, 3130000, 4150000, 3170000] },
            Region { name: "Groningen", bbox: [4010000, 3320000, 4050000, 3360000] },
            Region { name: "Maastricht", bbox: [4075000, 3110000, 4115000, 3150000] },
            Region { name: "Leeuwarden", bbox: [3960000, 3370000, 4000000, 3410000] },
            Region { name: "Almere", bbox: [4095000, 3260000, 4125000, 3290000] },
            Region { name: "Wind Farm North Sea", bbox: [3680000, 3430000, 3800000, 3550000] },
        ],
    },
    Country {
        name: "Poland",
        bbox: [4622000, 2884000, 5220000, 3637000],
        regions: &[
            Region { name: "Warsaw", bbox: [5470000, 3420000, 5510000, 3460000] },
            Region { name: "Kuyavia-Pomerania", bbox: [5290000, 3370000, 5490000, 3550000] },
            Region { name: "Lower Silesia", bbox: [5090000, 3240000, 5340000, 3460000] },
            Region { name: "Lodz", bbox: [5320000, 3320000, 5360000, 3360000] },
            Region { name: "Silesia", bbox: [5320000, 3260000, 5460000, 3400000] },
            Region { name: "Pomerania", bbox: [5250000, 3590000, 5400000, 3700000] },
            Region { name: "Poznan", bbox: [5120000, 3420000, 5160000, 3460000] },
            Region { name: "Gdansk", bbox: [5370000, 3660000, 5410000, 3700000] },
            Region { name: "Katowice", bbox: [5325000, 3240000, 5365000, 3280000] },
            Region { name: "Zielona Góra", bbox: [5020000, 3390000, 5060000, 3430000] },
        ],
    },
    Country {
        name: "Portugal",
        bbox: [2585000, 1752000, 2990000, 2261000],
        regions: &[
            Region { name: "Lisbon", bbox: [2800000, 1990000, 2830000, 2020000] },
            Region { name: "Porto", bbox: [2750000, 2040000, 2780000, 2070000] },
            Region { name: "Alentejo", bbox: [2690000, 1900000, 2890000, 2180000] },
            Region { name: "Algarve", bbox: [2730000, 1780000, 2880000, 2020000] },
            Region { name: "Madeira", bbox: [1705000, 1265000, 2013000, 1540000] },
            Region { name: "Azores", bbox: [814000, 2526000, 1462000, 2536000] },
            Region { name: "Coimbra", bbox: [2770000, 1980000, 2790000, 2005000] },
            Region { name: "Faro", bbox: [2790000, 1750000, 2815000, 1765000] },
            Region { name: "Aveiro", bbox: [2760000, 2020000, 2785000, 2035000] },
            Region { name: "Braga", bbox: [2740000, 2070000, 2765000, 2095000] },
        ],
    },
    Country {
        name: "Romania",
        bbox: [5148000, 2335000, 6500000, 3150000],
        regions: &[
            Region { name: "Bucharest", bbox: [6050000, 2785000, 6090000, 2825000] },
            Region { name: "Transylvania", bbox: [5700000, 2730000, 6000000, 3030000] },
            Region { name: "Moldova Region", bbox: [6000000, 2800000, 6200000, 3050000] },
            Region { name: "Wallachia", bbox: [5800000, 2700000, 6100000, 2950000] },
            Region { name: "Oltenia", bbox: [5700000, 2650000, 5900000, 2900000] },
            Region { name: "Dobrogea", bbox: [6100000, 2750000, 6300000, 3000000] },
            Region { name: "Cluj-Napoca", bbox: [5580000, 2860000, 5620000, 2900000] },
            Region { name: "Timișoara", bbox: [5460000, 2740000, 5500000, 2780000] },
            Region { name: "Iași", bbox: [6140000, 2860000, 6180000, 2900000] },
            Region { name: "Craiova", bbox: [5620000, 2680000, 5660000, 2720000] },
        ],
    },
    Country {
        name: "Slovakia",
        bbox: [4833000, 2758000, 5225000, 3023000],
        regions: &[
            Region { name: "Bratislava", bbox: [4980000, 2890000, 5020000, 2930000] },
            Region { name: "Košice", bbox: [5320000, 2920000, 5360000, 2960000] },
            Region { name: "Prešov", bbox: [5300000, 2970000, 5340000, 3010000] },
            Region { name: "Trnava region", bbox: [4890000, 2870000, 4930000, 2910000] },
            Region { name: "Žilina region", bbox: [5020000, 2930000, 5060000, 2970000] },
            Region { name: "Banská Bystrica", bbox: [5090000, 2830000, 5130000, 2870000] },
            Region { name: "Nitra region", bbox: [4940000, 2835000, 4980000, 2875000] },
            Region { name: "Trenčín region", bbox: [4890000, 2900000, 4930000, 2940000] },
            Region { name: "Žilina city", bbox: [5025000, 2950000, 5065000, 2990000] },
            Region { name: "Kosice city", bbox: [5325000, 2925000, 5360000, 2955000] },
        ],
    },
    Country {
        name: "Slovenia",
        bbox: [4585000, 2484000, 4824000, 2663000],
        regions: &[
            Region { name: "Ljubljana", bbox: [4605000, 2580000, 4645000, 2620000] },
            Region { name: "Maribor", bbox: [4700000, 2585000, 4740000, 2625000] },
            Region { name: "Celje", bbox: [4675000, 2565000, 4715000, 2605000] },
            Region { name: "Kranj", bbox: [4585000, 2575000, 4625000, 2615000] },
            Region { name: "Koper", bbox: [4520000, 2525000, 4560000, 2565000] },
            Region { name: "Nova Gorica", bbox: [4465000, 2540000, 4505000, 2580000] },
            Region { name: "Murska Sobota", bbox: [4755000, 2590000, 4795000, 2630000] },
            Region { name: "Velenje", bbox: [4665000, 2575000, 4705000, 2615000] },
            Region { name: "Ptuj", bbox: [4720000, 2575000, 4760000, 2615000] },
            Region { name: "Savinja region", bbox: [4630000, 2545000, 4670000, 2585000] },
        ],
    },
    Country {
        name: "Spain",
        bbox: [2583000, 1651000, 3887000, 2337000],
        regions: &[
            Region { name: "Madrid", bbox: [3040000, 2110000, 3080000, 2150000] },
            Region { name: "Barcelona", bbox: [3410000, 2200000, 3450000, 2240000] },
            Region { name: "Andalusia", bbox: [2900000, 1550000, 3330000, 1990000] },
            Region { name: "Valencia", bbox: [3240000, 1930000, 3290000, 1980000] },
            Region { name: "Galicia", bbox: [2780000, 2170000, 3050000, 2500000] },
            Region { name: "Basque Country", bbox: [3190000, 2190000, 3250000, 2240000] },
            Region { name: "Castile‑La Mancha", bbox: [3010000, 1980000, 3280000, 2320000] },
            Region { name: "Catalonia", bbox: [3310000, 2070000, 3450000, 2260000] },
            Region { name: "Canary Islands", bbox: [1544000, 1024000, 2046000, 1040000] },
            Region { name: "Balearic Islands", bbox: [3010000, 1760000, 3180000, 1920000] },
        ],
    },
    Country {
        name: "Sweden",
        bbox: [4358000, 3558000, 4889000, 5163000],
        regions: &[
            Region { name: "Stockholm", bbox: [4740000, 4420000, 4780000, 4460000] },
            Region { name: "Gothenburg", bbox: [4430000, 4260000, 4470000, 4300000] },
            Region { name: "Malmö", bbox: [4570000, 4230000, 4610000, 4270000] },
            Region { name: "Uppsala", bbox: [4740000, 4470000, 4780000, 4510000] },
            Region { name: "Västerås", bbox: [4650000, 4400000, 4690000, 4440000] },
            Region { name: "Linköping", bbox: [4610000, 4290000, 4650000, 4330000] },
            Region { name: "Örebro", bbox: [4540000, 4310000, 4580000, 4350000] },
            Region { name: "Umeå", bbox: [4820000, 4870000, 4860000, 4910000] },
            Region { name: "Luleå", bbox: [4990000, 5050000, 5030000, 5090000] },
            Region { name: "Kiruna", bbox: [5170000, 5360000, 5210000, 5400000] },
        ],
    },
];
