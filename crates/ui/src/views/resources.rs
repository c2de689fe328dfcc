use dioxus::prelude::*;

use crate::toast::{Toast, Toaster};

struct ResourceCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    items: &'static [&'static str],
    tag: &'static str,
}

const RESOURCES: [ResourceCard; 6] = [
    ResourceCard {
        icon: "🐍",
        title: "Contoh Kode Python",
        description: "Template dan contoh program Python untuk mengajar dasar-dasar pemrograman",
        items: &["print(\"Halo, Dunia!\")", "nama = \"Guru\"", "umur = 30"],
        tag: "✓ Cocok untuk pemula",
    },
    ResourceCard {
        icon: "💬",
        title: "Template Prompt ChatGPT",
        description: "Contoh prompt efektif untuk menggunakan ChatGPT dalam pembelajaran",
        items: &[
            "\"Buatkan RPP untuk mengajar koding Python kepada siswa SMP dengan fokus pada \
             pembuatan game sederhana\"",
        ],
        tag: "✓ Hemat waktu persiapan",
    },
    ResourceCard {
        icon: "🎨",
        title: "Ide Proyek Kelas",
        description: "Proyek menarik yang dapat dikerjakan siswa untuk praktik koding",
        items: &[
            "✓ Kalkulator Sederhana",
            "✓ Quiz Interaktif",
            "✓ Chatbot Sederhana",
            "✓ Game Tebak Angka",
        ],
        tag: "✓ Step-by-step guide",
    },
    ResourceCard {
        icon: "🤖",
        title: "Rekomendasi Tools AI",
        description: "Tools AI terbaik untuk mendukung pembelajaran di kelas",
        items: &[
            "🔹 ChatGPT - Asisten pembelajaran",
            "🔹 GitHub Copilot - Bantuan koding",
            "🔹 Replit - Platform koding online",
            "🔹 Canva - Desain presentasi",
        ],
        tag: "✓ Gratis untuk pendidikan",
    },
    ResourceCard {
        icon: "👨‍🏫",
        title: "Metode Mengajar Efektif",
        description: "Strategi dan tips mengajar koding yang terbukti efektif",
        items: &[
            "1️⃣ Mulai dengan visual (Scratch/Blockly)",
            "2️⃣ Gunakan analogi sehari-hari",
            "3️⃣ Project-based learning",
            "4️⃣ Pair programming",
        ],
        tag: "✓ Terbukti meningkatkan engagement",
    },
    ResourceCard {
        icon: "📊",
        title: "Template Evaluasi",
        description: "Rubrik dan format penilaian untuk proyek koding siswa",
        items: &[
            "📋 Rubrik penilaian proyek",
            "📋 Kuis koding online",
            "📋 Peer review template",
            "📋 Portfolio checklist",
        ],
        tag: "✓ Siap pakai",
    },
];

/// Static resource library for teachers.
#[component]
pub fn ResourcesView(on_back: EventHandler<()>) -> Element {
    let mut toaster = use_context::<Toaster>();

    let cards = RESOURCES.iter().map(|card| {
        let items = card.items.iter().map(|item| {
            rsx! {
                li { class: "resource-item", "{item}" }
            }
        });
        rsx! {
            div { class: "resource-card",
                div { class: "resource-card-header",
                    span { class: "resource-icon", "{card.icon}" }
                    h3 { class: "resource-title", "{card.title}" }
                }
                p { class: "resource-description", "{card.description}" }
                ul { class: "resource-items", {items} }
                span { class: "resource-tag", "{card.tag}" }
            }
        }
    });

    rsx! {
        section { class: "detail-pane",
            button {
                class: "back-link",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                span { "←" }
                span { "Kembali ke Beranda" }
            }

            div { class: "detail-card",
                div { class: "resources-header",
                    div { class: "resources-emblem", "📚" }
                    h2 { class: "detail-title", "Sumber Belajar untuk Guru" }
                    p { class: "detail-body",
                        "Materi tambahan untuk memperkaya pembelajaran koding dan AI di kelas"
                    }
                }

                div { class: "resource-grid", {cards} }

                div { class: "detail-cta",
                    h4 { class: "detail-cta-title", "💡 Butuh Bantuan Lebih?" }
                    p { class: "detail-cta-body",
                        "Hubungi tim kami untuk mendapatkan materi customized sesuai kebutuhan \
                         kelas Anda"
                    }
                    button {
                        class: "btn btn-light",
                        r#type: "button",
                        onclick: move |_| toaster.show(Toast::success("Fitur akan segera hadir!")),
                        "Hubungi Kami"
                    }
                }
            }
        }
    }
}
