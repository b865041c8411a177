use super::*;

pub(super) static ID: Translations = Translations {
    nav: NavText { home: "Beranda", about: "Tentang Kami", products: "Produk", contact: "Kontak" },
    hero: HeroText {
        title: "Manufaktur Logam Presisi yang Dapat Anda Percaya",
        subtitle: "PT Cipta Metalindo Persada menghadirkan komponen stamping, permesinan dan rakitan berkualitas tinggi untuk sektor otomotif, rumah tangga dan industri.",
        cta: "Pelajari Lebih Lanjut",
    },
    home: HomeText {
        trusted_by: "Dipercaya oleh produsen terkemuka",
        featured_products: "Produk Unggulan",
        featured_desc: "Pilihan komponen yang kami produksi setiap hari untuk mitra di seluruh Indonesia dan mancanegara.",
        view_all: "Lihat Semua Produk",
    },
    about: AboutText {
        hero_title: "Tentang CMP",
        hero_subtitle: "Membangun komponen berkualitas dengan presisi, integritas dan perbaikan berkelanjutan.",
        who_we_are: "✦ Siapa Kami",
        company_title: "Keunggulan Manufaktur Sejak Awal",
        company_desc: "PT Cipta Metalindo Persada adalah produsen komponen logam yang melayani pelanggan otomotif, rumah tangga dan industri dengan kemampuan stamping, permesinan, karet dan perakitan.",
        company_desc2: "Tim kami memadukan insinyur berpengalaman dengan lini produksi modern untuk menghadirkan kualitas yang konsisten, harga bersaing dan waktu pengiriman yang andal.",
        iso_certified: "Bersertifikat ISO",
        global_reach: "Jangkauan Global",
        certified: "Tersertifikasi",
        stats_years: "Tahun Pengalaman",
        by_the_numbers: "✦ Dalam Angka",
        impact_title: "Dampak & Pertumbuhan Kami",
        our_purpose: "✦ Tujuan Kami",
        vision_mission: "Visi & Misi",
        vision_title: "Visi Kami",
        vision_desc: "Menjadi mitra komponen presisi paling tepercaya di Asia Tenggara, dikenal karena kualitas, inovasi dan manufaktur yang bertanggung jawab.",
        mission_title: "Misi Kami",
        missions: [
            "Menghasilkan komponen yang memenuhi atau melampaui spesifikasi pelanggan.",
            "Berinvestasi terus-menerus pada sumber daya manusia, mesin dan perbaikan proses.",
            "Membangun kemitraan jangka panjang berlandaskan transparansi dan keandalan.",
            "Beroperasi secara aman dan bertanggung jawab bagi karyawan dan masyarakat.",
        ],
        our_journey: "✦ Perjalanan Kami",
        timeline_title: "Tonggak Sejarah Kami",
        timeline_desc: "Dari awal yang sederhana hingga kepemimpinan industri — cerita pertumbuhan dan inovasi kami.",
        cta_title: "Siap Bermitra Dengan Kami?",
        cta_desc: "Mari diskusikan bagaimana kami dapat mewujudkan visi manufaktur Anda dengan presisi dan kualitas.",
        cta_button: "Hubungi Kami",
    },
    products: ProductsText {
        title: "Produk Kami",
        subtitle: "Jelajahi rangkaian komponen presisi kami di setiap industri yang kami layani.",
        showing: "Menampilkan",
        of: "dari",
        products_label: "produk",
        grid_view: "Grid",
        list_view: "Daftar",
        view_details: "Lihat Detail",
        no_products: "Tidak ada produk dalam kategori ini.",
        prev: "Sebelumnya",
        next: "Berikutnya",
        categories: CategoryText {
            all: "Semua",
            two_wheel: "Roda 2",
            four_wheel: "Roda 4",
            household: "Rumah Tangga",
            screen_oil: "Saringan Oli",
            rubber: "Karet",
            cnc: "CNC",
            pvc: "PVC",
            others: "Lainnya",
        },
    },
    contact: ContactText {
        title: "Hubungi Kami",
        subtitle: "Punya pertanyaan atau rencana proyek? Kirimkan pesan dan tim kami akan segera menghubungi Anda.",
        send_us_message: "Kirim Pesan",
        contact_information: "Informasi Kontak",
        reach_out: "Hubungi kami melalui salah satu saluran di bawah ini.",
        phone: "Telepon",
        email: "Email",
        address: "Alamat",
        office_hours: "Jam Kerja",
        office_hours_value: "Sen – Jum, 08:00 – 17:00",
        form_name: "Nama Lengkap",
        form_email: "Alamat Email",
        form_subject: "Subjek",
        form_message: "Pesan",
        placeholder_name: "Budi Santoso",
        placeholder_email: "budi@contoh.com",
        placeholder_subject: "Pertanyaan Produk",
        placeholder_message: "Ceritakan kebutuhan Anda...",
        form_submit: "Kirim Pesan",
        form_sending: "Mengirim...",
        form_success: "Terima kasih! Pesan Anda berhasil dikirim.",
        form_error: "Maaf, terjadi kesalahan. Silakan coba lagi.",
    },
    footer: FooterText {
        description: "Komponen logam presisi untuk sektor otomotif, rumah tangga dan industri.",
        quick_links: "Tautan Cepat",
        contact_info: "Info Kontak",
        location: "Lokasi",
        rights: "Hak cipta dilindungi.",
        privacy: "Kebijakan Privasi",
        terms: "Syarat Layanan",
    },
    locale: LocaleText { switch_label: "ID", current: "Indonesia", other_label: "EN", other_name: "English" },
};
