//! Everything the page says about Santiago. Read-only; components borrow
//! straight from these statics.

use std::sync::LazyLock;

use regex::Regex;

pub struct PersonalInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub secondary_email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub description: &'static str,
    pub short_bio: &'static str,
    pub photo: &'static str,
    pub resume: &'static str,
}

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Santiago Álvarez Gutiérrez",
    short_name: "Santiago Álvarez",
    initials: "SA",
    role: "Tecnólogo en Desarrollo de Software",
    location: "Santiago de Cali, Valle del Cauca, Colombia",
    email: "santiago.alvarez.gutierrez.@correounivalle.edu.co",
    secondary_email: "santiagoalvarez2005@hotmail.com",
    phone: "+57 321 8669135",
    github: "https://github.com/Santiago-AGZ",
    linkedin: "https://www.linkedin.com/in/santiago-alvarez-gutierrez-033359375",
    description: "Apasionado por el desarrollo web moderno, especializado en React, TypeScript y soluciones cloud. Con experiencia en proyectos fullstack y metodologías ágiles.",
    short_bio: "Especializado en aplicaciones web modernas con React, TypeScript y tecnologías cloud. Apasionado por crear soluciones digitales impactantes.",
    photo: "/foto-santiago.png",
    resume: "/HV Santiago Álvarez Gutiérrez.pdf",
};

pub static ABOUT_PARAGRAPHS: [&str; 3] = [
    "Soy un desarrollador de software en formación con una pasión por crear experiencias digitales excepcionales. Actualmente curso el programa de Tecnología en Desarrollo de Software en la Universidad del Valle, donde he desarrollado habilidades sólidas en desarrollo web fullstack.",
    "Mi experiencia incluye el desarrollo de aplicaciones web completas utilizando React, TypeScript y tecnologías cloud como Supabase y Firebase. Me especializo en crear interfaces de usuario modernas, intuitivas y altamente funcionales.",
    "Trabajo eficientemente en equipos utilizando metodologías ágiles como Scrum, y tengo experiencia sólida en control de versiones con Git y GitHub. Estoy constantemente aprendiendo nuevas tecnologías y mejores prácticas para mantenerme actualizado en este campo en constante evolución.",
];

pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        label: "Formación",
        value: "Universidad del Valle",
    },
    Highlight {
        label: "Proyectos",
        value: "3+ Completados",
    },
    Highlight {
        label: "Experiencia",
        value: "Fullstack",
    },
    Highlight {
        label: "Metodología",
        value: "Scrum",
    },
];

pub struct Education {
    pub title: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub current: bool,
}

pub static EDUCATION: [Education; 3] = [
    Education {
        title: "Tecnología en Desarrollo de Software",
        institution: "Universidad del Valle",
        location: "Yumbo, Valle del Cauca",
        year: "2025",
        current: true,
    },
    Education {
        title: "Técnico en Sistemas",
        institution: "Servicio Nacional de Aprendizaje (SENA)",
        location: "Santiago de Cali, Valle del Cauca",
        year: "2022",
        current: false,
    },
    Education {
        title: "Bachiller Técnico en Mecánica Industrial",
        institution: "CASD - Institución Educativa General Francisco de Paula Santander",
        location: "Santiago de Cali, Valle del Cauca",
        year: "2020",
        current: false,
    },
];

pub struct Course {
    pub title: &'static str,
    pub institution: &'static str,
    pub hours: u32,
    pub year: &'static str,
}

pub static COMPLEMENTARY_EDUCATION: [Course; 3] = [
    Course {
        title: "Fundamentos de Análisis y Cálculo Numérico",
        institution: "Universidad del Valle",
        hours: 144,
        year: "2025",
    },
    Course {
        title: "Desarrollo de Software II",
        institution: "Universidad del Valle",
        hours: 144,
        year: "2024",
    },
    Course {
        title: "Bases de Datos",
        institution: "Universidad del Valle",
        hours: 192,
        year: "2023",
    },
];

/// Icons served by skillicons.dev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillIcon {
    TypeScript,
    JavaScript,
    Java,
    Python,
    Html,
    Css,
    React,
    Vite,
    Tailwind,
    Spring,
    NodeJs,
    Postgres,
    Supabase,
    Firebase,
    Git,
    GitHub,
    Docker,
    Vercel,
    VsCode,
    Postman,
    Blender,
    ThreeJs,
    Figma,
}

impl SkillIcon {
    pub fn slug(&self) -> &'static str {
        match self {
            SkillIcon::TypeScript => "typescript",
            SkillIcon::JavaScript => "javascript",
            SkillIcon::Java => "java",
            SkillIcon::Python => "python",
            SkillIcon::Html => "html",
            SkillIcon::Css => "css",
            SkillIcon::React => "react",
            SkillIcon::Vite => "vite",
            SkillIcon::Tailwind => "tailwind",
            SkillIcon::Spring => "spring",
            SkillIcon::NodeJs => "nodejs",
            SkillIcon::Postgres => "postgres",
            SkillIcon::Supabase => "supabase",
            SkillIcon::Firebase => "firebase",
            SkillIcon::Git => "git",
            SkillIcon::GitHub => "github",
            SkillIcon::Docker => "docker",
            SkillIcon::Vercel => "vercel",
            SkillIcon::VsCode => "vscode",
            SkillIcon::Postman => "postman",
            SkillIcon::Blender => "blender",
            SkillIcon::ThreeJs => "threejs",
            SkillIcon::Figma => "figma",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillIcon::TypeScript => "TypeScript",
            SkillIcon::JavaScript => "JavaScript",
            SkillIcon::Java => "Java",
            SkillIcon::Python => "Python",
            SkillIcon::Html => "HTML5",
            SkillIcon::Css => "CSS3",
            SkillIcon::React => "React",
            SkillIcon::Vite => "Vite",
            SkillIcon::Tailwind => "Tailwind CSS",
            SkillIcon::Spring => "Spring Boot",
            SkillIcon::NodeJs => "Node.js",
            SkillIcon::Postgres => "PostgreSQL",
            SkillIcon::Supabase => "Supabase",
            SkillIcon::Firebase => "Firebase",
            SkillIcon::Git => "Git",
            SkillIcon::GitHub => "GitHub",
            SkillIcon::Docker => "Docker",
            SkillIcon::Vercel => "Vercel",
            SkillIcon::VsCode => "VS Code",
            SkillIcon::Postman => "Postman",
            SkillIcon::Blender => "Blender",
            SkillIcon::ThreeJs => "Three.js",
            SkillIcon::Figma => "Figma",
        }
    }

    /// The icon image, drawn for the given colour scheme.
    pub fn icon_url(&self, theme: &str) -> String {
        format!("https://skillicons.dev/icons?i={}&theme={theme}", self.slug())
    }
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icons: &'static [SkillIcon],
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Lenguajes",
        icons: &[
            SkillIcon::TypeScript,
            SkillIcon::JavaScript,
            SkillIcon::Java,
            SkillIcon::Python,
            SkillIcon::Html,
            SkillIcon::Css,
        ],
    },
    SkillCategory {
        title: "Frontend",
        icons: &[SkillIcon::React, SkillIcon::Vite, SkillIcon::Tailwind],
    },
    SkillCategory {
        title: "Backend & Databases",
        icons: &[
            SkillIcon::Spring,
            SkillIcon::NodeJs,
            SkillIcon::Postgres,
            SkillIcon::Supabase,
            SkillIcon::Firebase,
        ],
    },
    SkillCategory {
        title: "Herramientas & DevOps",
        icons: &[
            SkillIcon::Git,
            SkillIcon::GitHub,
            SkillIcon::Docker,
            SkillIcon::Vercel,
            SkillIcon::VsCode,
            SkillIcon::Postman,
        ],
    },
    SkillCategory {
        title: "Otros",
        icons: &[SkillIcon::Blender, SkillIcon::ThreeJs, SkillIcon::Figma],
    },
];

pub static SOFT_SKILLS: [&str; 4] = [
    "Trabajo colaborativo en equipos de desarrollo",
    "Aplicación de la metodología ágil Scrum",
    "Análisis y resolución de problemas técnicos",
    "Aprendizaje autónomo de nuevas tecnologías",
];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub period: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub impact: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub github_url: &'static str,
    /// File names under `/public/projects`.
    pub images: &'static [&'static str],
    pub color: &'static str,
}

impl Project {
    pub fn image_urls(&self) -> impl Iterator<Item = String> + '_ {
        self.images.iter().map(|img| format!("/projects/{img}"))
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: "fajas-anjully",
        title: "Fajas AnjulLy – Plataforma E-commerce",
        description: "Plataforma web de comercio electrónico desarrollada para la venta de fajas y productos de bienestar, con experiencia de usuario intuitiva y un panel administrativo para la gestión de productos y pedidos.",
        period: "Febrero - Junio 2025",
        technologies: &["React", "Vite", "Tailwind CSS", "Supabase", "PostgreSQL", "Vercel"],
        features: &[
            "Catálogo de productos con filtros dinámicos y paginación",
            "Vista detallada de productos con variantes de talla y color",
            "Carrito de compras funcional y persistente",
            "Flujo completo de checkout y confirmación de pedido",
            "Gestión de productos y órdenes desde panel administrativo",
            "Autenticación y gestión de usuarios",
            "Notificaciones automáticas por correo electrónico",
        ],
        impact: None,
        demo_url: Some("https://fajas-anjully.vercel.app/"),
        github_url: "https://github.com/Santiago-AGZ/ecommerce-faja-anjully",
        images: &["fajas1.png", "fajas2.png", "fajas3.png", "fajas4.png"],
        color: "#FF6B35",
    },
    Project {
        id: "DogApp",
        title: "DogApp – Plataforma de gestión de citas veterinarias",
        description: "Aplicación para la gestión de citas veterinarias caninas que permite registrar, visualizar, editar y eliminar citas, administrar información de mascotas y propietarios, e integrar autenticación de usuarios y servicios externos para la obtención dinámica de razas e imágenes de perros.",
        period: "Febrero - Junio 2025",
        technologies: &[
            "Android (Java)",
            "Retrofit",
            "Firebase Authentication",
            "Firebase Firestore",
            "Git",
            "Github",
            "Dog CEO API",
            "Arquitectura MVVM",
            "Dagger Hilt",
            "JUnit",
            "Mockito",
        ],
        features: &[
            "Sistema de login y registro con autenticación segura",
            "Gestión completa de citas (crear, listar, editar y eliminar)",
            "Visualización detallada de información de mascotas y propietarios",
            "Autocompletado de razas mediante consumo de API externa",
            "Asignación dinámica de imágenes según la raza del perro",
            "Interfaz gráfica basada en principios de UX/UI",
            "Persistencia de datos en la nube con Firestore",
        ],
        impact: None,
        demo_url: None,
        github_url: "https://github.com/AlexanderJAON/EquipoTres",
        images: &[
            "dogapp1.png",
            "dogapp2.png",
            "dogapp3.png",
            "dogapp4.png",
            "dogapp5.png",
            "dogapp6.png",
        ],
        color: "#9D4EDD",
    },
    Project {
        id: "textile-purify",
        title: "Textile Purify – Plataforma Web 3D Educativa",
        description: "Plataforma Web 3D educativa enfocada en la contaminación del agua, diseñada para sensibilizar y educar a los usuarios mediante experiencias inmersivas e interactivas que presentan problemáticas, impactos y soluciones ambientales.",
        period: "Agosto - Diciembre 2024",
        technologies: &[
            "React",
            "React Three Fiber",
            "Three.js",
            "Drei",
            "Blender",
            "Firebase",
            "TypeScript",
            "Zustand",
            "Vercel",
            "Git",
            "GitHub",
            "Figma",
            "Jira",
        ],
        features: &[
            "Escenarios 3D interactivos sobre la contaminación del agua",
            "Visualización inmersiva de causas, impactos y soluciones ambientales",
            "Sistema de autenticación y gestión de usuarios en la nube",
            "Navegación guiada y arquitectura de información orientada a la usabilidad",
        ],
        impact: Some("Proyecto orientado a la educación ambiental y la concienciación sobre la contaminación del agua mediante tecnologías Web 3D."),
        demo_url: Some("https://textile-purify-ten.vercel.app/"),
        github_url: "https://github.com/Elkin-Pena-UV/textile-purify",
        images: &["textile1.png", "textile2.png", "textile3.png", "textile4.png"],
        color: "#00D9FF",
    },
];

pub struct NavItem {
    pub label: &'static str,
    /// Section id, without the leading `#`.
    pub target: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

pub static NAVIGATION: [NavItem; 5] = [
    NavItem {
        label: "Inicio",
        target: "inicio",
    },
    NavItem {
        label: "Sobre mí",
        target: "sobre-mi",
    },
    NavItem {
        label: "Habilidades",
        target: "habilidades",
    },
    NavItem {
        label: "Proyectos",
        target: "proyectos",
    },
    NavItem {
        label: "Contacto",
        target: "contacto",
    },
];

pub mod seo {
    pub const DEFAULT_TITLE: &str = "Santiago Álvarez Gutiérrez - Desarrollador de Software";
    pub const TITLE_TEMPLATE: &str = "%s | Santiago Álvarez";
    pub const DESCRIPTION: &str = "Portafolio profesional de Santiago Álvarez Gutiérrez, desarrollador de software especializado en React, TypeScript y tecnologías web modernas.";
    pub const KEYWORDS: [&str; 7] = [
        "desarrollador web",
        "react",
        "typescript",
        "frontend",
        "fullstack",
        "portafolio",
        "santiago alvarez",
    ];
    pub const OG_IMAGE: &str = "/og-image.png";
    pub const TWITTER_HANDLE: &str = "@santiago_agz";

    pub fn title(page: &str) -> String {
        TITLE_TEMPLATE.replace("%s", page)
    }
}

pub const EMAIL_VISIBLE_CHARS: usize = 15;

static PHONE_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.{8}).*(.{3})$").expect("phone mask should compile"));

/// Keeps the first `visible` characters of the local part and the domain:
/// `santiago.alvarez@example.com` becomes `santiago.al...@example.com` with
/// `visible = 11`. Addresses too short to mask are returned unchanged.
pub fn mask_email(email: &str, visible: usize) -> String {
    match Regex::new(&format!("(.{{{visible}}}).*(@)")) {
        Ok(re) => re.replace(email, "$1...$2").into_owned(),
        Err(e) => {
            log::warn!("couldn't build email mask: {e}");
            email.to_string()
        }
    }
}

/// `+57 321 8669135` becomes `+57 321 ****135`.
pub fn mask_phone(phone: &str) -> String {
    PHONE_MASK.replace(phone, "$1****$2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(
            mask_email(PERSONAL_INFO.email, EMAIL_VISIBLE_CHARS),
            "santiago.alvare...@correounivalle.edu.co"
        );
        assert_eq!(
            mask_email("santiago.alvarez@example.com", 11),
            "santiago.al...@example.com"
        );
        assert_eq!(mask_email("ana@test.com", 15), "ana@test.com");
    }

    #[test]
    fn test_mask_secondary_email() {
        assert_eq!(
            mask_email(PERSONAL_INFO.secondary_email, EMAIL_VISIBLE_CHARS),
            "santiagoalvarez...@hotmail.com"
        );
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone(PERSONAL_INFO.phone), "+57 321 ****135");
        assert_eq!(mask_phone("12345"), "12345");
    }

    #[test]
    fn test_navigation_targets_are_unique_section_ids() {
        let mut targets = NAVIGATION.iter().map(|n| n.target).collect::<Vec<_>>();
        targets.sort_unstable();
        targets.dedup();
        assert_eq!(targets.len(), NAVIGATION.len());
        assert_eq!(NAVIGATION[0].href(), "#inicio");
    }

    #[test]
    fn test_project_images_and_icons() {
        let urls = PROJECTS[0].image_urls().collect::<Vec<_>>();
        assert_eq!(urls[0], "/projects/fajas1.png");
        assert_eq!(
            SkillIcon::Postgres.icon_url("dark"),
            "https://skillicons.dev/icons?i=postgres&theme=dark"
        );
        assert_eq!(SkillIcon::Spring.display_name(), "Spring Boot");
    }

    #[test]
    fn test_title_template() {
        assert_eq!(seo::title("Inicio"), "Inicio | Santiago Álvarez");
    }
}
