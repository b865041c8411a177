use super::types::{LocalizedField as L, Stat, TimelineEvent};

pub(super) static STATS: [Stat; 4] = [
    Stat { value: "11+", label: L::new("Years Experience", "Tahun Pengalaman") },
    Stat { value: "150+", label: L::new("More Than Employees", "Lebih Dari Karyawan") },
    Stat { value: "500K+", label: L::new("Parts/Month", "Part/Bulan") },
    Stat { value: "200+", label: L::new("Product Lines", "Lini Produk") },
];

pub(super) static TIMELINE: [TimelineEvent; 6] = [
    TimelineEvent {
        year: "1995",
        title: L::new("Company Founded", "Perusahaan Didirikan"),
        description: L::new(
            "PT Cipta Metalindo Persada was established in Jakarta with a small workshop and a vision for manufacturing excellence.",
            "PT Cipta Metalindo Persada didirikan di Jakarta dengan bengkel kecil dan visi untuk keunggulan manufaktur.",
        ),
    },
    TimelineEvent {
        year: "2002",
        title: L::new("First Major Contract", "Kontrak Besar Pertama"),
        description: L::new(
            "Secured our first major automotive parts contract, marking the beginning of rapid growth in the industry.",
            "Mendapatkan kontrak suku cadang otomotif besar pertama, menandai awal pertumbuhan pesat di industri.",
        ),
    },
    TimelineEvent {
        year: "2008",
        title: L::new("ISO 9001 Certification", "Sertifikasi ISO 9001"),
        description: L::new(
            "Achieved ISO 9001:2008 certification, demonstrating our commitment to international quality standards.",
            "Meraih sertifikasi ISO 9001:2008, menunjukkan komitmen kami terhadap standar kualitas internasional.",
        ),
    },
    TimelineEvent {
        year: "2014",
        title: L::new("New Factory Expansion", "Ekspansi Pabrik Baru"),
        description: L::new(
            "Opened our second manufacturing facility with advanced CNC machinery and automated production lines.",
            "Membuka fasilitas manufaktur kedua dengan mesin CNC canggih dan jalur produksi otomatis.",
        ),
    },
    TimelineEvent {
        year: "2019",
        title: L::new("Export Market Expansion", "Ekspansi Pasar Ekspor"),
        description: L::new(
            "Expanded operations to serve international markets across Southeast Asia, Australia, and Europe.",
            "Memperluas operasi untuk melayani pasar internasional di Asia Tenggara, Australia, dan Eropa.",
        ),
    },
    TimelineEvent {
        year: "2024",
        title: L::new("Industry 4.0 Integration", "Integrasi Industri 4.0"),
        description: L::new(
            "Implemented smart manufacturing systems with IoT integration and real-time production monitoring.",
            "Mengimplementasikan sistem manufaktur pintar dengan integrasi IoT dan pemantauan produksi real-time.",
        ),
    },
];
