//! Labelled products as `(category, EPREL id, name)`. Duplicates are kept as listed.

use super::Product;

pub(super) const PRODUCTS: &[Product] = &[
    Product { category: "lightsources", id: 423340, name: "Philips Signify LED" },
    Product { category: "lightsources", id: 614102, name: "LEDVANCE LED Lamp" },
    Product { category: "lightsources", id: 546279, name: "Osram LED Superstar PAR11 Spotlight" },
    Product { category: "lightsources", id: 546424, name: "Osram LED Lamp" },
    Product { category: "lightsources", id: 1672034, name: "Conalux LED Bulb" },
    Product { category: "lightsources", id: 523286, name: "Osram LED Superstar Classic A Bulb" },
    Product { category: "lightsources", id: 1027006, name: "UMAGE 2435 LED Panel Light" },
    Product { category: "lightsources", id: 997961, name: "Light-Point AURA W1 LED Wall Lamp" },
    Product { category: "electronicdisplays", id: 342333, name: "LG 32-inch LCD TV" },
    Product { category: "electronicdisplays", id: 360640, name: "Philips 32PHS5505 LED TV" },
    Product { category: "electronicdisplays", id: 360650, name: "Philips 24PFS5505 LED TV" },
    Product { category: "electronicdisplays", id: 360643, name: "Philips 43PFS5505 Full HD LED TV" },
    Product { category: "electronicdisplays", id: 1161811, name: "Philips 43PUS8057 UHD LED TV" },
    Product { category: "electronicdisplays", id: 2249039, name: "Philips 65PUS8500 Ambilight TV" },
    Product { category: "electronicdisplays", id: 420631, name: "Philips 55PUS9435 Android TV" },
    Product { category: "electronicdisplays", id: 580722, name: "Philips 43PUS7406 LED TV" },
    Product { category: "electronicdisplays", id: 1133973, name: "Philips 32PHS5507 LED TV" },
    Product { category: "electronicdisplays", id: 1537992, name: "Philips 55OLED708 OLED TV" },
    Product { category: "electronicdisplays", id: 1875218, name: "Samsung The Frame QE55LS03 TV" },
    Product { category: "electronicdisplays", id: 403707, name: "Sony XR-55A90J OLED TV" },
    Product { category: "electronicdisplays", id: 1133974, name: "Philips 43PFS5507 LED TV" },
    Product { category: "electronicdisplays", id: 617003, name: "Philips 24PFS5505/62 LED TV" },
    Product { category: "electronicdisplays", id: 617007, name: "Philips 32PHS5505/62 LED TV" },
    Product { category: "electronicdisplays", id: 617056, name: "Philips 43PFS5505/62 LED TV" },
    Product { category: "airconditioners", id: 209450, name: "Samsung AR12TXHQASIN Air Conditioner" },
    Product { category: "airconditioners", id: 386947, name: "Mitsubishi MSZ-AP20VGK Air Conditioner" },
    Product { category: "airconditioners", id: 161369, name: "Daikin FTXA42A2V1BT Air Conditioner" },
    Product { category: "refrigeratingappliances2019", id: 373089, name: "Millesime Wine Cooler" },
    Product { category: "refrigeratingappliances2019", id: 1879960, name: "Samsung RF65DG9H0EB1 Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 788877, name: "Siemens KG39NAIAT Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 260955, name: "Bosch KSV36VLEP Refrigerator" },
    Product { category: "refrigeratingappliances2019", id: 420406, name: "Samsung RS6HA8891B1 Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 1599545, name: "LG GSM32HSBEH Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 2026753, name: "LG GBF3102EEP Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 2000312, name: "Bosch KGN33NLEBG Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 2090506, name: "Bosch KGN392WEBG Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 1847166, name: "LG GBV3110EPY Fridge-Freezer" },
    Product { category: "refrigeratingappliances2019", id: 1790415, name: "Klarstein 18-Bottle Wine Cooler" },
    Product { category: "refrigeratingappliancesdirectsalesfunction", id: 1519452, name: "JBG-2 LDFI291250 Beverage Cooler" },
    Product { category: "refrigeratingappliancesdirectsalesfunction", id: 1680698, name: "JBG-2 WNEL172500 Freezer Cabinet" },
    Product { category: "refrigeratingappliancesdirectsalesfunction", id: 1178346, name: "ARNEG spa. OSK3P-963128090VCB022801" },
    Product { category: "dishwashers2019", id: 2119457, name: "Indesit IN2IE10 Dishwasher" },
    Product { category: "dishwashers2019", id: 1450861, name: "Siemens SN65ZX07CE Dishwasher" },
    Product { category: "dishwashers2019", id: 1776411, name: "Bosch SMV4EVX08E Dishwasher" },
    Product { category: "dishwashers2019", id: 1864516, name: "Neff S195HCX02G Dishwasher" },
    Product { category: "dishwashers2019", id: 1606927, name: "Bosch SMD8TCX01E Dishwasher" },
    Product { category: "dishwashers2019", id: 1452629, name: "Candy CF 5C7F0X Dishwasher" },
    Product { category: "dishwashers2019", id: 2261658, name: "Bosch SMS6TCI02G Serie 6 Dishwasher" },
    Product { category: "washingmachines2019", id: 1776425, name: "Bosch WGG244FCGB Washer" },
    Product { category: "washingmachines2019", id: 1865269, name: "Miele WCA032 WCS Washer" },
    Product { category: "washingmachines2019", id: 1105176, name: "Bosch Serie 6 WUU28T70 Washer" },
    Product { category: "washingmachines2019", id: 1331024, name: "PKM WA8-ES1416DAI Washer" },
    Product { category: "washingmachines2019", id: 1465039, name: "Samsung WW80T534AAX Washer" },
    Product { category: "washingmachines2019", id: 1365926, name: "Bosch Serie 6 WGG254F0IT Washer" },
    Product { category: "washingmachines2019", id: 262932, name: "Samsung WW90T534DAW Washer" },
    Product { category: "washerdriers2019", id: 1256614, name: "Bosch WNG25401GB Washer-Dryer" },
    Product { category: "washerdriers2019", id: 1450874, name: "Siemens WN54C2A40 Washer-Dryer" },
    Product { category: "washerdriers2019", id: 1450882, name: "Bosch WNC244070 Serie 8 Washer-Dryer" },
    Product { category: "washerdriers2019", id: 306895, name: "Candy CSOW 4855TWE/1-S Washer-Dryer" },
    Product { category: "tumbledriers", id: 1298104, name: "AEG TR722E84P Dryer" },
    Product { category: "tumbledriers", id: 1563412, name: "Bosch WTH85223GB Dryer" },
    Product { category: "tumbledriers", id: 1574692, name: "Siemens iQ700 WQ45B2B40 Dryer" },
    Product { category: "tumbledriers", id: 1776057, name: "Bosch Serie 4 WTN83203 Dryer" },
    Product { category: "ovens", id: 82328, name: "Indesit IFW 6330 IX Oven" },
    Product { category: "ovens", id: 1293452, name: "Bosch Serie 8 HBG7763B1 Oven" },
    Product { category: "ovens", id: 165747, name: "Neff B3ACE4HN0B Built-in Oven" },
    Product { category: "rangehoods", id: 767499, name: "Neff I88WMM1S7B Hood" },
    Product { category: "rangehoods", id: 563610, name: "Bosch DFR067A52 Hood" },
    Product { category: "rangehoods", id: 1323374, name: "AEG DPK5660B Hood" },
    Product { category: "rangehoods", id: 1994289, name: "Klarstein DownDraft 60 Cooker Hood" },
    Product { category: "localspaceheaters", id: 415304, name: "Spartherm Linear Module XS Wood Stove" },
    Product { category: "localspaceheaters", id: 415438, name: "Spartherm Arte U-70h Fireplace" },
    Product { category: "localspaceheaters", id: 545040, name: "Extraflame LUCE BIANCO Pellet Stove" },
    Product { category: "spaceheaters", id: 86427, name: "Vaillant ecoTEC Gas Boiler" },
    Product { category: "spaceheaters", id: 790978, name: "Vaillant ecoTEC Pro VMW236 Boiler" },
    Product { category: "spaceheaterpackages", id: 1019834, name: "Ritter 72P0010 Boiler+Solar Package" },
    Product { category: "waterheaters", id: 108766, name: "Ariston Blu1 Eco Electric Water Heater" },
    Product { category: "residentialventilationunits", id: 94736, name: "Systemair Ventila FT Ventilation Unit" },
    Product { category: "residentialventilationunits", id: 2085254, name: "Zehnder ComfoAir Q600 Ventilation Unit" },
    Product { category: "residentialventilationunits", id: 2082335, name: "Zehnder ComfoAir Q350 Ventilation Unit" },
    Product { category: "waterheaters", id: 108766, name: "Ariston Blu1 Eco Electric Water Heater" },
    Product { category: "hotwaterstoragetanks", id: 27672, name: "Wolf Pufferspeicher SPU-1-200 Tank" },
    Product { category: "hotwaterstoragetanks", id: 27673, name: "Wolf Pufferspeicher SPU-2-500 Tank" },
    Product { category: "solidfuelboilers", id: 2261458, name: "PellPal DUO 18 Pellet Boiler" },
    Product { category: "solidfuelboilerpackages", id: 1447353, name: "Solarbayer HKK 30 Boiler Package" },
    Product { category: "tyres", id: 1743675, name: "Goodyear EfficientGrip Performance" },
    Product { category: "tyres", id: 568079, name: "Goodyear EfficientGrip Cargo" },
    Product { category: "tyres", id: 596965, name: "Pirelli P Zero Nero" },
    Product { category: "tyres", id: 409435, name: "Michelin e.Primacy (other size)" },
    Product { category: "tyres", id: 843310, name: "Continental PremiumContact 7" },
    Product { category: "tyres", id: 659191, name: "Continental EcoContact 6" },
    Product { category: "tyres", id: 643892, name: "Continental SportContact 7" },
    Product { category: "tyres", id: 596271, name: "Continental VanContact 4Season" },
    Product { category: "tyres", id: 2049862, name: "Continental CrossContact LX Sport" },
    Product { category: "tyres", id: 382321, name: "Bridgestone Turanza T005 (195/65R15 91H)" },
    Product { category: "tyres", id: 611160, name: "Goodyear EfficientGrip Cargo 2" },
    Product { category: "tyres", id: 411122, name: "Michelin e.Primacy (205/55R17 95V XL)" },
    Product { category: "tyres", id: 412786, name: "Michelin Primacy 4+ (205/55R16 91H)" },
    Product { category: "tyres", id: 977568, name: "Michelin Primacy 4+ (235/45R18 98Y)" },
    Product { category: "tyres", id: 1104261, name: "Michelin e.Primacy S2 (205/55R19 97V)" },
    Product { category: "tyres", id: 796599, name: "Michelin e.Primacy (205/55R17)" },
    Product { category: "tyres", id: 1434459, name: "Goodyear Eagle F1 Asymmetric 6 (235/40R19)" },
    Product { category: "tyres", id: 380987, name: "Bridgestone Turanza T005 (205/55R16 91W)" },
    Product { category: "tyres", id: 501593, name: "Bridgestone Turanza T005 (225/45R17 94Y)" },
];
