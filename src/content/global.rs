//! Site-wide content: the global FAQ, the curated resource list, and the
//! legal/about text.

use crate::locale::{Locale, Localized};

use super::{FaqEntry, Resource, ResourceKind};

pub static GLOBAL_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "what-is-this",
        question: Localized {
            en: "What is dev-atlas?",
            ja: Some("dev-atlasとは何ですか？"),
            es: Some("¿Qué es dev-atlas?"),
        },
        answer: Localized {
            en: "A browsable atlas of learning roadmaps, curated resources, and job-market snapshots for software careers.",
            ja: Some("ソフトウェアキャリアのための学習ロードマップ、厳選リソース、求人市場スナップショットをまとめた閲覧型アトラスです。"),
            es: Some("Un atlas navegable de rutas de aprendizaje, recursos seleccionados e instantáneas del mercado laboral para carreras de software."),
        },
    },
    FaqEntry {
        id: "which-path",
        question: Localized {
            en: "How do I choose a learning path?",
            ja: Some("学習パスはどう選べばいいですか？"),
            es: Some("¿Cómo elijo una ruta de aprendizaje?"),
        },
        answer: Localized {
            en: "Pick the category closest to what you want to build, open its first sub-topic, and follow the roadmap top to bottom. Switching paths early is cheap; finishing something matters more.",
            ja: Some("作りたいものに最も近いカテゴリを選び、最初のサブトピックを開いてロードマップを上から順に進めてください。早い段階での方向転換は低コストです。何かをやり切ることの方が重要です。"),
            es: Some("Elige la categoría más cercana a lo que quieres construir, abre su primer subtema y sigue la ruta de arriba abajo. Cambiar de ruta al principio es barato; terminar algo importa más."),
        },
    },
    FaqEntry {
        id: "how-long",
        question: Localized {
            en: "How long until I'm job-ready?",
            ja: Some("就職できるレベルまでどのくらいかかりますか？"),
            es: Some("¿Cuánto tiempo hasta estar listo para trabajar?"),
        },
        answer: Localized {
            en: "With consistent daily practice, most people reach junior-level competence in 9 to 18 months. Portfolio projects shorten that more than certificates do.",
            ja: Some("毎日継続して学習すれば、多くの人は9〜18か月でジュニアレベルに到達します。資格よりもポートフォリオ作品の方が近道です。"),
            es: Some("Con práctica diaria constante, la mayoría alcanza un nivel junior en 9 a 18 meses. Los proyectos de portafolio acortan ese camino más que los certificados."),
        },
    },
    FaqEntry {
        id: "salary-data",
        question: Localized {
            en: "Where does the salary data come from?",
            ja: Some("給与データの出典は？"),
            es: Some("¿De dónde vienen los datos salariales?"),
        },
        answer: Localized {
            en: "Bands are rounded composites of public salary surveys and job-board listings, refreshed with each content release. Treat them as orientation, not offers.",
            ja: Some("公開されている給与調査と求人サイトの掲載情報をもとにした概算レンジで、コンテンツ更新のたびに見直しています。目安としてご利用ください。"),
            es: Some("Las bandas son promedios redondeados de encuestas salariales públicas y ofertas de empleo, actualizados con cada versión del contenido. Tómalas como orientación, no como ofertas."),
        },
    },
    FaqEntry {
        id: "offline",
        question: Localized {
            en: "Does it work offline?",
            ja: Some("オフラインでも使えますか？"),
            es: Some("¿Funciona sin conexión?"),
        },
        answer: Localized {
            en: "Once loaded, yes — all content ships with the app and nothing is fetched at runtime. Only your language and region choices are stored, locally in your browser.",
            ja: Some("一度読み込めば使えます。すべてのコンテンツはアプリに同梱され、実行時の通信はありません。保存されるのは言語と地域の設定だけで、それもブラウザ内のみです。"),
            es: Some("Una vez cargado, sí: todo el contenido viene con la aplicación y nada se descarga en tiempo de ejecución. Solo se guardan tus preferencias de idioma y región, localmente en tu navegador."),
        },
    },
    FaqEntry {
        id: "contribute",
        question: Localized {
            en: "Can I suggest a resource or fix a translation?",
            ja: Some("リソースの提案や翻訳の修正はできますか？"),
            es: Some("¿Puedo sugerir un recurso o corregir una traducción?"),
        },
        answer: Localized {
            en: "Yes — content lives in plain data tables in the repository; open an issue or a pull request against them.",
            ja: Some("できます。コンテンツはリポジトリ内のプレーンなデータテーブルにあります。IssueかPull Requestをお送りください。"),
            es: Some("Sí: el contenido vive en tablas de datos del repositorio; abre un issue o un pull request."),
        },
    },
];

pub static GLOBAL_RESOURCES: &[Resource] = &[
    Resource {
        kind: ResourceKind::Article,
        title: "Teach Yourself Programming in Ten Years",
        url: "https://norvig.com/21-days.html",
        description: "Peter Norvig on why depth beats speed",
        source_lang: Locale::En,
    },
    Resource {
        kind: ResourceKind::Course,
        title: "CS50x",
        url: "https://cs50.harvard.edu/x/",
        description: "Harvard's free introduction to computer science",
        source_lang: Locale::En,
    },
    Resource {
        kind: ResourceKind::Book,
        title: "The Missing Semester of Your CS Education",
        url: "https://missing.csail.mit.edu/",
        description: "Shell, editors, git — the tools courses skip",
        source_lang: Locale::En,
    },
    Resource {
        kind: ResourceKind::Tool,
        title: "exercism",
        url: "https://exercism.org/",
        description: "Practice problems with mentor feedback, 70+ languages",
        source_lang: Locale::En,
    },
    Resource {
        kind: ResourceKind::Article,
        title: "プログラミング入門 - とほほのWWW入門",
        url: "https://www.tohoho-web.com/www.htm",
        description: "Long-running Japanese primer on web fundamentals",
        source_lang: Locale::Ja,
    },
];

pub static LEGAL: Localized<&str> = Localized {
    en: "dev-atlas is an independent, non-commercial learning guide.\n\n\
         All trademarks, product names, and company names mentioned belong to \
         their respective owners; listing them does not imply endorsement. \
         Salary figures are rounded estimates compiled from public sources and \
         carry no guarantee of accuracy.\n\n\
         The only data this app stores are your language and region choices, \
         kept in your browser's local storage. Nothing is transmitted anywhere.",
    ja: Some(
        "dev-atlasは独立した非営利の学習ガイドです。\n\n\
         記載されている商標・製品名・会社名はそれぞれの権利者に帰属し、掲載は推奨を意味しません。\
         給与の数値は公開情報をもとにした概算であり、正確性は保証されません。\n\n\
         本アプリが保存するのは言語と地域の設定のみで、ブラウザのローカルストレージに保持されます。\
         外部への送信は一切ありません。",
    ),
    es: Some(
        "dev-atlas es una guía de aprendizaje independiente y sin ánimo de lucro.\n\n\
         Todas las marcas, nombres de productos y empresas mencionados pertenecen \
         a sus respectivos propietarios; su inclusión no implica respaldo. Las \
         cifras salariales son estimaciones redondeadas de fuentes públicas y no \
         garantizan exactitud.\n\n\
         Los únicos datos que guarda esta aplicación son tus preferencias de \
         idioma y región, en el almacenamiento local de tu navegador. No se \
         transmite nada.",
    ),
};
