//! The learning catalog: categories, sub-topics, and per-topic payloads.
//!
//! Pure data. Display order is declaration order. English is the base locale;
//! translations are filled in where they exist and fall back otherwise.

use ratzilla::ratatui::style::Color;

use crate::locale::{Locale, Localized, Region};

use super::{
    Category, FaqData, FaqEntry, JobsData, LocalFaq, Milestone, Posting, Resource, ResourceKind,
    Stage, SubTopic, TopicContent,
};

pub static CATEGORIES: &[Category] = &[
    Category {
        id: "mobile-dev",
        icon: "📱",
        color: Color::Cyan,
        title: Localized {
            en: "Mobile Development",
            ja: Some("モバイル開発"),
            es: Some("Desarrollo móvil"),
        },
        description: Localized {
            en: "Build native apps for phones and tablets",
            ja: Some("スマートフォン・タブレット向けネイティブアプリ開発"),
            es: Some("Crea aplicaciones nativas para móviles y tabletas"),
        },
        topics: &[
            SubTopic {
                id: "ios",
                title: Localized::base("iOS"),
            },
            SubTopic {
                id: "android",
                title: Localized::base("Android"),
            },
        ],
    },
    Category {
        id: "web-dev",
        icon: "🌐",
        color: Color::Green,
        title: Localized {
            en: "Web Development",
            ja: Some("Web開発"),
            es: Some("Desarrollo web"),
        },
        description: Localized {
            en: "Everything from markup to APIs at scale",
            ja: Some("マークアップから大規模APIまで"),
            es: Some("Desde el marcado hasta APIs a gran escala"),
        },
        topics: &[
            SubTopic {
                id: "frontend",
                title: Localized {
                    en: "Frontend",
                    ja: Some("フロントエンド"),
                    es: Some("Frontend"),
                },
            },
            SubTopic {
                id: "backend",
                title: Localized {
                    en: "Backend",
                    ja: Some("バックエンド"),
                    es: Some("Backend"),
                },
            },
        ],
    },
    Category {
        id: "data-ai",
        icon: "🤖",
        color: Color::Magenta,
        title: Localized {
            en: "Data & AI",
            ja: Some("データ・AI"),
            es: Some("Datos e IA"),
        },
        description: Localized {
            en: "From spreadsheets to machine learning in production",
            ja: Some("表計算から本番環境の機械学習まで"),
            es: Some("De hojas de cálculo al aprendizaje automático en producción"),
        },
        topics: &[
            SubTopic {
                id: "data-science",
                title: Localized {
                    en: "Data Science",
                    ja: Some("データサイエンス"),
                    es: Some("Ciencia de datos"),
                },
            },
            SubTopic {
                id: "machine-learning",
                title: Localized {
                    en: "Machine Learning",
                    ja: Some("機械学習"),
                    es: Some("Aprendizaje automático"),
                },
            },
        ],
    },
    Category {
        id: "infra",
        icon: "☁",
        color: Color::Yellow,
        title: Localized {
            en: "Infrastructure",
            ja: Some("インフラ"),
            es: Some("Infraestructura"),
        },
        description: Localized {
            en: "Keep software running: pipelines, clusters, clouds",
            ja: Some("ソフトウェアを動かし続ける：パイプライン、クラスタ、クラウド"),
            es: Some("Mantén el software en marcha: pipelines, clústeres, nubes"),
        },
        topics: &[SubTopic {
            id: "devops",
            title: Localized::base("DevOps"),
        }],
    },
    // No sub-topics yet; the category view renders its prompt state.
    Category {
        id: "game-dev",
        icon: "🎮",
        color: Color::Red,
        title: Localized {
            en: "Game Development",
            ja: Some("ゲーム開発"),
            es: Some("Desarrollo de videojuegos"),
        },
        description: Localized {
            en: "Engines, graphics, and gameplay programming",
            ja: Some("エンジン、グラフィックス、ゲームプレイプログラミング"),
            es: Some("Motores, gráficos y programación de jugabilidad"),
        },
        topics: &[],
    },
];

// ── Per-topic FAQ blocks ───────────────────────────────────────────────

static IOS_FAQ: FaqData = FaqData::FlatList(&[
    FaqEntry {
        id: "ios-mac",
        question: Localized {
            en: "Do I need a Mac to learn iOS development?",
            ja: Some("iOS開発の学習にMacは必要ですか？"),
            es: Some("¿Necesito un Mac para aprender desarrollo iOS?"),
        },
        answer: Localized {
            en: "For real app development yes — Xcode only runs on macOS. You can try Swift itself in online playgrounds first.",
            ja: Some("本格的な開発には必要です。XcodeはmacOSでのみ動作します。Swift自体はオンラインのプレイグラウンドで試せます。"),
            es: Some("Para desarrollo real sí: Xcode solo funciona en macOS. Puedes probar Swift en playgrounds en línea primero."),
        },
    },
    FaqEntry {
        id: "ios-objc",
        question: Localized {
            en: "Should I still learn Objective-C?",
            ja: Some("Objective-Cも学ぶべきですか？"),
            es: None,
        },
        answer: Localized {
            en: "Start with Swift. Objective-C matters only when maintaining older codebases.",
            ja: Some("まずSwiftから始めましょう。Objective-Cは古いコードベースを保守する場合にのみ重要です。"),
            es: None,
        },
    },
]);

static ANDROID_FAQ: FaqData = FaqData::LocaleKeyed(Localized {
    en: &[
        LocalFaq {
            question: "Kotlin or Java for a beginner?",
            answer: "Kotlin. It is the language Google documents first, and every modern API sample assumes it.",
        },
        LocalFaq {
            question: "Can I develop on Windows or Linux?",
            answer: "Yes — Android Studio runs on Windows, macOS, and Linux alike.",
        },
    ],
    ja: Some(&[
        LocalFaq {
            question: "初心者はKotlinとJavaどちらを学ぶべき？",
            answer: "Kotlinです。Googleのドキュメントや最新APIのサンプルはKotlin前提です。",
        },
        LocalFaq {
            question: "WindowsやLinuxでも開発できますか？",
            answer: "できます。Android StudioはWindows・macOS・Linuxすべてで動作します。",
        },
    ]),
    es: None,
});

static FRONTEND_FAQ: FaqData = FaqData::FlatList(&[FaqEntry {
    id: "fe-framework",
    question: Localized {
        en: "Which framework should I pick first?",
        ja: Some("最初に学ぶフレームワークはどれ？"),
        es: Some("¿Qué framework debería elegir primero?"),
    },
    answer: Localized {
        en: "Learn plain HTML, CSS, and JavaScript well first. Afterward any of React, Vue, or Svelte is a fine choice — job markets differ by city more than frameworks differ in merit.",
        ja: Some("まずHTML・CSS・素のJavaScriptをしっかり学びましょう。その後はReact・Vue・Svelteのどれでも構いません。"),
        es: Some("Primero domina HTML, CSS y JavaScript puro. Después, React, Vue o Svelte son buenas opciones."),
    },
}]);

static BACKEND_FAQ: FaqData = FaqData::LocaleKeyed(Localized {
    en: &[LocalFaq {
        question: "Do I need to know SQL even with an ORM?",
        answer: "Yes. ORMs generate SQL; when a query is slow you will read and tune the SQL underneath.",
    }],
    ja: Some(&[LocalFaq {
        question: "ORMを使うならSQLは不要ですか？",
        answer: "必要です。ORMはSQLを生成するだけで、遅いクエリの調査では結局その下のSQLを読んで調整します。",
    }]),
    es: None,
});

static DEVOPS_FAQ: FaqData = FaqData::FlatList(&[FaqEntry {
    id: "devops-entry",
    question: Localized {
        en: "Is DevOps an entry-level role?",
        ja: Some("DevOpsは未経験から就ける職種ですか？"),
        es: None,
    },
    answer: Localized {
        en: "Usually not. Most DevOps engineers start as developers or sysadmins and grow into the role.",
        ja: Some("通常は違います。多くのDevOpsエンジニアは開発者やシステム管理者からキャリアを広げています。"),
        es: None,
    },
}]);

// ── Per-topic payloads ─────────────────────────────────────────────────

pub static TOPIC_CONTENT: &[TopicContent] = &[
    TopicContent {
        topic_id: "ios",
        roadmap: Localized {
            en: &[
                Milestone {
                    title: "Swift Basics",
                    items: &[
                        "Optionals and value types",
                        "Protocols and extensions",
                        "Swift Playgrounds exercises",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "UIKit & SwiftUI",
                    items: &[
                        "View hierarchy and Auto Layout",
                        "SwiftUI state and bindings",
                        "Navigation patterns",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "Data & Networking",
                    items: &[
                        "URLSession and Codable",
                        "Core Data basics",
                        "Keychain and secure storage",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "Concurrency & Architecture",
                    items: &[
                        "async/await and actors",
                        "MVVM and dependency injection",
                        "Instruments profiling",
                    ],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "Ship to the App Store",
                    items: &[
                        "Code signing and TestFlight",
                        "App Store review guidelines",
                        "Crash reporting in production",
                    ],
                    stage: Stage::Expert,
                },
            ],
            ja: Some(&[
                Milestone {
                    title: "Swiftの基礎",
                    items: &[
                        "オプショナルと値型",
                        "プロトコルとエクステンション",
                        "Swift Playgroundsでの演習",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "UIKitとSwiftUI",
                    items: &[
                        "ビュー階層とAuto Layout",
                        "SwiftUIの状態とバインディング",
                        "画面遷移パターン",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "データと通信",
                    items: &["URLSessionとCodable", "Core Dataの基礎", "Keychainと安全な保存"],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "並行処理とアーキテクチャ",
                    items: &["async/awaitとアクター", "MVVMと依存性注入", "Instrumentsでの計測"],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "App Storeへ公開",
                    items: &["署名とTestFlight", "審査ガイドライン", "本番のクラッシュレポート"],
                    stage: Stage::Expert,
                },
            ]),
            es: None,
        },
        resources: &[
            Resource {
                kind: ResourceKind::Course,
                title: "100 Days of SwiftUI",
                url: "https://www.hackingwithswift.com/100/swiftui",
                description: "Free daily course from zero to a finished app",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Article,
                title: "Apple Developer Documentation",
                url: "https://developer.apple.com/documentation/",
                description: "The canonical API reference",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Video,
                title: "WWDC Session Videos",
                url: "https://developer.apple.com/videos/",
                description: "Platform deep dives straight from the source",
                source_lang: Locale::En,
            },
        ],
        jobs: &[
            (
                Region::Global,
                JobsData::Aggregate {
                    platforms: &["LinkedIn", "Otta", "RemoteOK"],
                    top_skills: &["Swift", "SwiftUI", "REST APIs", "Git"],
                    salary_band: "$70k – $150k",
                },
            ),
            (
                Region::UnitedStates,
                JobsData::Postings(&[
                    Posting {
                        title: "iOS Engineer",
                        company: "Calm",
                        location: "San Francisco, CA (remote)",
                    },
                    Posting {
                        title: "Senior iOS Developer",
                        company: "Target",
                        location: "Minneapolis, MN",
                    },
                    Posting {
                        title: "Mobile Engineer, iOS",
                        company: "Block",
                        location: "New York, NY",
                    },
                ]),
            ),
        ],
        faq: Some(&IOS_FAQ),
    },
    TopicContent {
        topic_id: "android",
        roadmap: Localized {
            en: &[
                Milestone {
                    title: "Language Fundamentals",
                    items: &[
                        "Kotlin syntax and null safety",
                        "Kotlin Playground katas",
                        "Coroutines basics",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "App Components",
                    items: &[
                        "Activities and lifecycles",
                        "Jetpack Compose layouts",
                        "Intents and permissions",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "Data & Background Work",
                    items: &["Room persistence", "Retrofit and OkHttp", "WorkManager jobs"],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "Release Engineering",
                    items: &[
                        "Play Console tracks",
                        "R8 shrinking and ProGuard rules",
                        "Baseline profiles",
                    ],
                    stage: Stage::Expert,
                },
            ],
            ja: Some(&[
                Milestone {
                    title: "言語の基礎",
                    items: &[
                        "Kotlinの文法とnull安全",
                        "Kotlin Playgroundで練習",
                        "コルーチン入門",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "アプリの構成要素",
                    items: &[
                        "Activityとライフサイクル",
                        "Jetpack Composeレイアウト",
                        "Intentと権限",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "データとバックグラウンド処理",
                    items: &["Roomによる永続化", "RetrofitとOkHttp", "WorkManager"],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "リリースエンジニアリング",
                    items: &["Play Consoleのトラック", "R8とProGuardルール", "ベースラインプロファイル"],
                    stage: Stage::Expert,
                },
            ]),
            es: None,
        },
        resources: &[
            Resource {
                kind: ResourceKind::Course,
                title: "Android Basics with Compose",
                url: "https://developer.android.com/courses/android-basics-compose/course",
                description: "Google's official beginner track",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Tool,
                title: "Kotlin Playground",
                url: "https://play.kotlinlang.org/",
                description: "Run Kotlin in the browser, no install",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Book,
                title: "Kotlin in Action",
                url: "https://www.manning.com/books/kotlin-in-action-second-edition",
                description: "Language deep dive by JetBrains engineers",
                source_lang: Locale::En,
            },
        ],
        jobs: &[
            (
                Region::Global,
                JobsData::Aggregate {
                    platforms: &["LinkedIn", "Wellfound", "RemoteOK"],
                    top_skills: &["Kotlin", "Jetpack Compose", "Coroutines", "Gradle"],
                    salary_band: "$65k – $140k",
                },
            ),
            (
                Region::Japan,
                JobsData::Aggregate {
                    platforms: &["Green", "Findy", "LAPRAS"],
                    top_skills: &["Kotlin", "Jetpack Compose", "Firebase"],
                    salary_band: "¥5M – ¥11M",
                },
            ),
        ],
        faq: Some(&ANDROID_FAQ),
    },
    TopicContent {
        topic_id: "frontend",
        roadmap: Localized {
            en: &[
                Milestone {
                    title: "The Web Platform",
                    items: &[
                        "Semantic HTML",
                        "CSS layout: flexbox and grid",
                        "JavaScript fundamentals",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "Tooling",
                    items: &["npm and bundlers", "TypeScript", "Browser devtools fluency"],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "A Component Framework",
                    items: &[
                        "React or Vue or Svelte",
                        "State management patterns",
                        "Client-side routing",
                    ],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "Production Concerns",
                    items: &[
                        "Performance budgets and Core Web Vitals",
                        "Accessibility audits",
                        "End-to-end testing",
                    ],
                    stage: Stage::Expert,
                },
            ],
            ja: None,
            es: Some(&[
                Milestone {
                    title: "La plataforma web",
                    items: &[
                        "HTML semántico",
                        "Maquetación CSS: flexbox y grid",
                        "Fundamentos de JavaScript",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "Herramientas",
                    items: &["npm y empaquetadores", "TypeScript", "Dominio de las devtools"],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "Un framework de componentes",
                    items: &[
                        "React, Vue o Svelte",
                        "Patrones de gestión de estado",
                        "Enrutado en el cliente",
                    ],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "Producción",
                    items: &[
                        "Presupuestos de rendimiento y Core Web Vitals",
                        "Auditorías de accesibilidad",
                        "Pruebas de extremo a extremo",
                    ],
                    stage: Stage::Expert,
                },
            ]),
        },
        resources: &[
            Resource {
                kind: ResourceKind::Article,
                title: "MDN Web Docs",
                url: "https://developer.mozilla.org/",
                description: "The reference for HTML, CSS, and JavaScript",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Course,
                title: "The Odin Project",
                url: "https://www.theodinproject.com/",
                description: "Free full-stack curriculum with projects",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Article,
                title: "JavaScript Primer",
                url: "https://jsprimer.net/",
                description: "Modern JavaScript from scratch, in Japanese",
                source_lang: Locale::Ja,
            },
        ],
        jobs: &[(
            Region::Global,
            JobsData::Postings(&[
                Posting {
                    title: "Frontend Developer",
                    company: "Shopify",
                    location: "Remote",
                },
                Posting {
                    title: "UI Engineer",
                    company: "Datadog",
                    location: "Paris, France",
                },
                Posting {
                    title: "Web Developer",
                    company: "Mercari",
                    location: "Tokyo, Japan",
                },
            ]),
        )],
        faq: Some(&FRONTEND_FAQ),
    },
    TopicContent {
        topic_id: "backend",
        roadmap: Localized {
            en: &[
                Milestone {
                    title: "A Server Language",
                    items: &[
                        "Pick one: Go, Python, Node.js, Rust",
                        "HTTP semantics and REST",
                        "JSON serialization",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "Databases",
                    items: &[
                        "SQL joins and indexes",
                        "Migrations",
                        "When to reach for a cache",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "Operations",
                    items: &[
                        "Structured logging",
                        "Metrics and tracing",
                        "Zero-downtime deploys",
                    ],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "Distributed Systems",
                    items: &[
                        "Queues and idempotency",
                        "Consistency trade-offs",
                        "Designing for partial failure",
                    ],
                    stage: Stage::Expert,
                },
            ],
            ja: None,
            es: None,
        },
        resources: &[
            Resource {
                kind: ResourceKind::Book,
                title: "Designing Data-Intensive Applications",
                url: "https://dataintensive.net/",
                description: "The distributed-systems book everyone cites",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Course,
                title: "SQLBolt",
                url: "https://sqlbolt.com/",
                description: "Interactive SQL lessons in the browser",
                source_lang: Locale::En,
            },
        ],
        jobs: &[
            (
                Region::Global,
                JobsData::Aggregate {
                    platforms: &["LinkedIn", "Hacker News Who's Hiring", "RemoteOK"],
                    top_skills: &["SQL", "Go", "Python", "Kubernetes"],
                    salary_band: "$75k – $160k",
                },
            ),
            (
                Region::UnitedStates,
                JobsData::Aggregate {
                    platforms: &["LinkedIn", "Built In", "Dice"],
                    top_skills: &["Go", "PostgreSQL", "AWS", "gRPC"],
                    salary_band: "$110k – $190k",
                },
            ),
        ],
        faq: Some(&BACKEND_FAQ),
    },
    TopicContent {
        topic_id: "data-science",
        roadmap: Localized {
            en: &[
                Milestone {
                    title: "Foundations",
                    items: &[
                        "Python and notebooks",
                        "Descriptive statistics",
                        "Data cleaning with pandas",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "Analysis & Visualization",
                    items: &[
                        "Exploratory data analysis",
                        "Plotting that tells a story",
                        "SQL for analytics",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "Inference",
                    items: &[
                        "Hypothesis testing",
                        "A/B experiment design",
                        "Communicating uncertainty",
                    ],
                    stage: Stage::Advanced,
                },
            ],
            ja: None,
            es: None,
        },
        resources: &[
            Resource {
                kind: ResourceKind::Course,
                title: "Kaggle Learn",
                url: "https://www.kaggle.com/learn",
                description: "Short hands-on micro-courses with datasets",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Book,
                title: "Python for Data Analysis",
                url: "https://wesmckinney.com/book/",
                description: "pandas from its original author, free online",
                source_lang: Locale::En,
            },
        ],
        jobs: &[(
            Region::Global,
            JobsData::Aggregate {
                platforms: &["LinkedIn", "Kaggle Jobs"],
                top_skills: &["Python", "SQL", "pandas", "statistics"],
                salary_band: "$60k – $140k",
            },
        )],
        faq: None,
    },
    // Roadmap and jobs still being written; the tabs render their
    // coming-soon placeholder.
    TopicContent {
        topic_id: "machine-learning",
        roadmap: Localized {
            en: &[],
            ja: None,
            es: None,
        },
        resources: &[
            Resource {
                kind: ResourceKind::Course,
                title: "fast.ai Practical Deep Learning",
                url: "https://course.fast.ai/",
                description: "Top-down deep learning for coders",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Video,
                title: "3Blue1Brown: Neural Networks",
                url: "https://www.3blue1brown.com/topics/neural-networks",
                description: "Visual intuition for backpropagation",
                source_lang: Locale::En,
            },
        ],
        jobs: &[],
        faq: None,
    },
    TopicContent {
        topic_id: "devops",
        roadmap: Localized {
            en: &[
                Milestone {
                    title: "Linux & Shell",
                    items: &[
                        "Filesystem, processes, permissions",
                        "Bash scripting",
                        "ssh and tmux",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "Containers & CI",
                    items: &[
                        "Docker images and registries",
                        "Pipeline design",
                        "Artifact versioning",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "Orchestration & IaC",
                    items: &[
                        "Kubernetes workloads",
                        "Terraform state",
                        "Secrets management",
                    ],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "Reliability",
                    items: &["SLOs and error budgets", "Incident response", "Capacity planning"],
                    stage: Stage::Expert,
                },
            ],
            ja: Some(&[
                Milestone {
                    title: "Linuxとシェル",
                    items: &[
                        "ファイルシステム・プロセス・権限",
                        "Bashスクリプト",
                        "sshとtmux",
                    ],
                    stage: Stage::Start,
                },
                Milestone {
                    title: "コンテナとCI",
                    items: &[
                        "Dockerイメージとレジストリ",
                        "パイプライン設計",
                        "アーティファクトのバージョニング",
                    ],
                    stage: Stage::Mid,
                },
                Milestone {
                    title: "オーケストレーションとIaC",
                    items: &["Kubernetesワークロード", "Terraformのstate", "シークレット管理"],
                    stage: Stage::Advanced,
                },
                Milestone {
                    title: "信頼性",
                    items: &["SLOとエラーバジェット", "インシデント対応", "キャパシティプランニング"],
                    stage: Stage::Expert,
                },
            ]),
            es: None,
        },
        resources: &[
            Resource {
                kind: ResourceKind::Article,
                title: "Google SRE Book",
                url: "https://sre.google/sre-book/table-of-contents/",
                description: "How Google runs production systems, free online",
                source_lang: Locale::En,
            },
            Resource {
                kind: ResourceKind::Tool,
                title: "Killercoda Kubernetes Scenarios",
                url: "https://killercoda.com/",
                description: "Disposable clusters in the browser",
                source_lang: Locale::En,
            },
        ],
        jobs: &[
            (
                Region::Global,
                JobsData::Aggregate {
                    platforms: &["LinkedIn", "DevOps Jobs Board"],
                    top_skills: &["Kubernetes", "Terraform", "AWS", "Observability"],
                    salary_band: "$85k – $170k",
                },
            ),
            (
                Region::Japan,
                JobsData::Postings(&[
                    Posting {
                        title: "SRE",
                        company: "LINEヤフー",
                        location: "東京",
                    },
                    Posting {
                        title: "Platform Engineer",
                        company: "SmartNews",
                        location: "Tokyo (hybrid)",
                    },
                ]),
            ),
        ],
        faq: Some(&DEVOPS_FAQ),
    },
];
