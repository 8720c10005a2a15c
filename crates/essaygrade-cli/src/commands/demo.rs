//! The `essaygrade demo` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use essaygrade_core::grade_answer;

const KEY_INDUSTRIAL_REVOLUTION: &str = "
Revolusi Industri adalah periode transformasi besar dalam sejarah manusia, dimulai pada akhir abad ke-18 dan awal abad ke-19, terutama di Britania Raya.
Perubahan utama meliputi peralihan dari metode produksi tangan ke mesin, penggunaan energi uap dan air, serta pengembangan sistem pabrik.
Ini menyebabkan urbanisasi besar-besaran, munculnya kelas pekerja baru, peningkatan produksi barang, dan perubahan drastis dalam struktur sosial dan ekonomi.
Penemuan-penemuan penting termasuk mesin uap oleh James Watt dan Spinning Jenny.
";

const KEY_PHOTOSYNTHESIS: &str = "
Fotosintesis adalah proses biokimia di mana organisme autotrof, terutama tumbuhan, alga, dan beberapa bakteri, mengubah energi cahaya menjadi energi kimia.
Proses ini menggunakan sinar matahari, karbon dioksida dari udara, dan air dari tanah untuk menghasilkan glukosa (sebagai sumber energi) dan oksigen (sebagai produk sampingan).
Fotosintesis sangat penting bagi kehidupan di Bumi karena menghasilkan oksigen yang dihirup sebagian besar makhluk hidup dan merupakan dasar dari sebagian besar rantai makanan.
";

struct Sample {
    question: &'static str,
    label: &'static str,
    answer: &'static str,
    key: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        question: "Revolusi Industri",
        label: "Baik",
        answer: "
Revolusi Industri adalah masa perubahan signifikan di abad ke-18 dan ke-19, dimulai di Inggris.
Produksi beralih dari manual ke mesin, dengan penemuan mesin uap dan pabrik.
Terjadi urbanisasi dan munculnya kelas pekerja, serta perubahan ekonomi dan sosial yang mendalam.
",
        key: KEY_INDUSTRIAL_REVOLUTION,
    },
    Sample {
        question: "Revolusi Industri",
        label: "Sedang",
        answer: "
Revolusi terjadi di industri. Ada mesin baru dan orang-orang pindah ke kota. Produksi jadi lebih cepat.
",
        key: KEY_INDUSTRIAL_REVOLUTION,
    },
    Sample {
        question: "Revolusi Industri",
        label: "Kurang",
        answer: "
Ini tentang sejarah lama yang ada mesinnya. Itu aja.
",
        key: KEY_INDUSTRIAL_REVOLUTION,
    },
    Sample {
        question: "Fotosintesis",
        label: "Baik",
        answer: "
Tumbuhan melakukan fotosintesis, menggunakan cahaya matahari, karbondioksida, dan air untuk membuat glukosa dan melepaskan oksigen.
Ini penting untuk kehidupan karena menghasilkan oksigen yang kita butuhkan.
",
        key: KEY_PHOTOSYNTHESIS,
    },
    Sample {
        question: "Fotosintesis",
        label: "Pendek",
        answer: "
Tumbuhan buat makanan pakai matahari.
",
        key: KEY_PHOTOSYNTHESIS,
    },
    Sample {
        question: "Fotosintesis",
        label: "Tidak Tahu",
        answer: "
Saya tidak tahu jawabannya.
",
        key: KEY_PHOTOSYNTHESIS,
    },
];

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Soal", "Jawaban", "Nilai", "Feedback"]);

    for sample in SAMPLES {
        let result = grade_answer(sample.answer, sample.key);
        table.add_row(vec![
            Cell::new(sample.question),
            Cell::new(sample.label),
            Cell::new(result.grade),
            Cell::new(result.feedback.join("; ")),
        ]);
    }

    println!("{table}");
    Ok(())
}
