use super::types::{LocalizedField as L, Product, ProductCategory as C};

pub(super) static PRODUCTS: [Product; 15] = [
    Product {
        id: "prod-001",
        name: L::new("Motorcycle Exhaust Bracket", "Bracket Knalpot Motor"),
        description: L::new(
            "High-strength steel bracket for motorcycle exhaust systems",
            "Bracket baja kekuatan tinggi untuk sistem knalpot motor",
        ),
        category: C::TwoWheel,
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85f82e?w=400&h=400&fit=crop",
        featured: true,
    },
    Product {
        id: "prod-002",
        name: L::new("Brake Disc Component", "Komponen Cakram Rem"),
        description: L::new(
            "Precision-machined brake disc for 2-wheel vehicles",
            "Cakram rem presisi untuk kendaraan roda 2",
        ),
        category: C::TwoWheel,
        image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?w=400&h=400&fit=crop",
        featured: true,
    },
    Product {
        id: "prod-003",
        name: L::new("Chain Sprocket Assembly", "Rakitan Sproket Rantai"),
        description: L::new(
            "Durable chain sprocket for motorcycle drivetrains",
            "Sproket rantai tahan lama untuk drivetrain motor",
        ),
        category: C::TwoWheel,
        image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400&h=400&fit=crop",
        featured: false,
    },
    Product {
        id: "prod-004",
        name: L::new("Car Door Hinge", "Engsel Pintu Mobil"),
        description: L::new(
            "Heavy-duty door hinge for automotive applications",
            "Engsel pintu tugas berat untuk aplikasi otomotif",
        ),
        category: C::FourWheel,
        image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=400&h=400&fit=crop",
        featured: true,
    },
    Product {
        id: "prod-005",
        name: L::new("Engine Mount Bracket", "Bracket Dudukan Mesin"),
        description: L::new(
            "Vibration-dampening engine mount for cars",
            "Dudukan mesin peredam getaran untuk mobil",
        ),
        category: C::FourWheel,
        image: "https://images.unsplash.com/photo-1487754180451-c456f719a1fc?w=400&h=400&fit=crop",
        featured: true,
    },
    Product {
        id: "prod-006",
        name: L::new("Suspension Arm", "Lengan Suspensi"),
        description: L::new(
            "Forged aluminum suspension arm for passenger vehicles",
            "Lengan suspensi aluminium tempa untuk kendaraan penumpang",
        ),
        category: C::FourWheel,
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?w=400&h=400&fit=crop",
        featured: false,
    },
    Product {
        id: "prod-007",
        name: L::new("Stainless Steel Cookware Handle", "Gagang Peralatan Masak Stainless"),
        description: L::new(
            "Ergonomic handle for premium cookware",
            "Gagang ergonomis untuk peralatan masak premium",
        ),
        category: C::Household,
        image: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400&h=400&fit=crop",
        featured: true,
    },
    Product {
        id: "prod-008",
        name: L::new("Cabinet Hardware Set", "Set Perangkat Keras Kabinet"),
        description: L::new(
            "Modern cabinet knobs and pulls in brushed steel",
            "Knob dan tarikan kabinet modern dari baja sikat",
        ),
        category: C::Household,
        image: "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?w=400&h=400&fit=crop",
        featured: false,
    },
    Product {
        id: "prod-009",
        name: L::new("Industrial Screen Filter", "Filter Saringan Industri"),
        description: L::new(
            "Fine mesh screen for oil filtration systems",
            "Saringan mesh halus untuk sistem filtrasi minyak",
        ),
        category: C::ScreenOil,
        image: "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?w=400&h=400&fit=crop",
        featured: true,
    },
    Product {
        id: "prod-010",
        name: L::new("Oil Separator Component", "Komponen Pemisah Minyak"),
        description: L::new(
            "High-efficiency oil separator for industrial use",
            "Pemisah minyak efisiensi tinggi untuk penggunaan industri",
        ),
        category: C::ScreenOil,
        image: "https://images.unsplash.com/photo-1581092160607-ee22621dd758?w=400&h=400&fit=crop",
        featured: false,
    },
    Product {
        id: "prod-011",
        name: L::new("Vibration Damper Rubber", "Karet Peredam Getaran"),
        description: L::new(
            "High-performance rubber damper for machinery",
            "Peredam karet performa tinggi untuk mesin",
        ),
        category: C::Rubber,
        image: "https://images.unsplash.com/photo-1565793298595-6a879b1d9492?w=400&h=400&fit=crop",
        featured: true,
    },
    Product {
        id: "prod-012",
        name: L::new("Seal Ring Gasket", "Gasket Cincin Segel"),
        description: L::new(
            "Precision rubber seal for hydraulic systems",
            "Segel karet presisi untuk sistem hidrolik",
        ),
        category: C::Rubber,
        image: "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?w=400&h=400&fit=crop",
        featured: false,
    },
    Product {
        id: "prod-013",
        name: L::new("Custom Metal Stamping", "Stempel Metal Kustom"),
        description: L::new("Custom precision metal stamping services", "Layanan stempel metal presisi kustom"),
        category: C::Others,
        image: "https://images.unsplash.com/photo-1533106497176-45ae19e68ba2?w=400&h=400&fit=crop",
        featured: false,
    },
    Product {
        id: "prod-014",
        name: L::new("Wire Form Component", "Komponen Bentuk Kawat"),
        description: L::new(
            "Custom wire forming for various applications",
            "Pembentukan kawat kustom untuk berbagai aplikasi",
        ),
        category: C::Others,
        image: "https://images.unsplash.com/photo-1567789884554-0b844b597180?w=400&h=400&fit=crop",
        featured: false,
    },
    Product {
        id: "prod-015",
        name: L::new("Furniture Leg Cap", "Tutup Kaki Furnitur"),
        description: L::new(
            "Protective metal caps for furniture legs",
            "Tutup metal pelindung untuk kaki furnitur",
        ),
        category: C::Household,
        image: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=400&h=400&fit=crop",
        featured: true,
    },
];
