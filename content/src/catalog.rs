//! Static portfolio content.
//!
//! DESIGN
//! ======
//! All content lives in one `static` [`Catalog`] built from `&'static` data so
//! lookups never allocate. Types derive `Serialize` so the whole catalog can
//! be exported as JSON.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

use crate::language::{Language, Localized, LocalizedList};
use crate::section::SectionId;

// =============================================================================
// TYPES
// =============================================================================

/// Publication state of a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaperStatus {
    Published,
    #[serde(rename = "Pre-print")]
    PrePrint,
    Submitted,
}

impl PaperStatus {
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Self::Published) => "Published",
            (Language::En, Self::PrePrint) => "Pre-print",
            (Language::En, Self::Submitted) => "Submitted",
            (Language::Zh, Self::Published) => "已发表",
            (Language::Zh, Self::PrePrint) => "预印本",
            (Language::Zh, Self::Submitted) => "已提交",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paper {
    pub title: &'static str,
    pub venue: &'static str,
    pub year: u16,
    #[serde(rename = "abstract")]
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub authors: &'static [&'static str],
    pub status: PaperStatus,
    pub pdf_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

/// Lifecycle of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Complete,
    #[serde(rename = "In Progress")]
    InProgress,
    Archived,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Self::Complete) => "Complete",
            (Language::En, Self::InProgress) => "In Progress",
            (Language::En, Self::Archived) => "Archived",
            (Language::Zh, Self::Complete) => "已完成",
            (Language::Zh, Self::InProgress) => "进行中",
            (Language::Zh, Self::Archived) => "已归档",
        }
    }
}

/// Problem / solution write-up shown in a project's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectDetails {
    pub problem: Localized,
    pub solution: Localized,
    pub features: LocalizedList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: Localized,
    pub description: Localized,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
    pub repo_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub details: Option<ProjectDetails>,
}

/// One line of the overview's kernel log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub event: Localized,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Repository,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub label: Localized,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

/// Expandable card on the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverviewCard {
    pub code: &'static str,
    pub title: Localized,
    pub summary: LocalizedList,
    pub details: Localized,
    pub facts: &'static [(Localized, Localized)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: Localized,
    pub role: Localized,
    pub unit: Localized,
    pub headline: Localized,
    pub intro: Localized,
    pub toolkit: &'static [&'static str],
}

/// Everything the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub profile: Profile,
    pub cards: &'static [OverviewCard],
    pub timeline: &'static [TimelineEntry],
    pub papers: &'static [Paper],
    pub projects: &'static [Project],
    pub contacts: &'static [ContactChannel],
}

impl Catalog {
    /// Number of detail views a section can open.
    ///
    /// Overview cards, papers, and projects each open one; the contact page has
    /// a single identity card.
    #[must_use]
    pub fn detail_count(&self, section: SectionId) -> usize {
        match section {
            SectionId::Overview => self.cards.len(),
            SectionId::Research => self.papers.len(),
            SectionId::Projects => self.projects.len(),
            SectionId::Contact => 1,
        }
    }
}

/// The site's content.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

// =============================================================================
// DATA
// =============================================================================

static CATALOG: Catalog = Catalog {
    profile: PROFILE,
    cards: CARDS,
    timeline: TIMELINE,
    papers: PAPERS,
    projects: PROJECTS,
    contacts: CONTACTS,
};

const PROFILE: Profile = Profile {
    name: Localized::new("XiaochiLiu", "刘骁驰"),
    role: Localized::new("RESEARCH_FELLOW", "研究助理 RESEARCH_FELLOW"),
    unit: Localized::new("BEIJING_NORMAL_UNIVERSITY", "北京师范大学 BNU"),
    headline: Localized::new("Building and Optimization.", "构建 与优化."),
    intro: Localized::new(
        "Welcome to my home page! I explore the intersection of LLM safety and statistics. \
         My goal is to uncover efficient solutions to hard problems in large language models.",
        "欢迎来到我的主页！我探索大模型安全与统计学的交叉领域。我的目标是为大模型中的难题找到高效解决方案。",
    ),
    toolkit: &["Python", "PyTorch", "LLM SFT", "LLM RAG", "Docker", "SQL"],
};

const CARDS: &[OverviewCard] = &[
    OverviewCard {
        code: "01",
        title: Localized::new("Academic Status", "学术现状"),
        summary: LocalizedList {
            en: &[
                "Senior Undergraduate",
                "College of Arts and Sciences, Dept. of Statistics",
                "Exp. Grad: JUNE 2026",
            ],
            zh: &["本科四年级", "文理学院，统计学系", "预计毕业：2026年6月"],
        },
        details: Localized::new(
            "Currently conducting advanced research in LLM security. My thesis focuses on strengthening \
             the robustness of watermark embedding and detection mechanisms for large language models.",
            "目前进行大模型溯源安全的前沿研究。我的论文重点是增强大模型水印掺杂与识别机制的稳健性。",
        ),
        facts: &[
            (Localized::same("GPA"), Localized::same("3.6 / 4.0")),
            (Localized::new("Dept", "系别"), Localized::new("Applied Statistics", "应用统计学")),
        ],
    },
    OverviewCard {
        code: "02",
        title: Localized::new("Research Areas", "研究领域"),
        summary: LocalizedList {
            en: &["LLM Security", "Transfer Learning", "Large-sample Theory"],
            zh: &["大模型安全 LLM Security", "迁移学习 Transfer Learning", "大样本理论 Large-sample Theory"],
        },
        details: Localized::new(
            "I am particularly interested in the intersection of theory and practice. My work often involves \
             designing algorithms with provable guarantees that are also practical for deployment in \
             real-world large language models.",
            "我对理论与实践的交叉领域特别感兴趣。我的工作通常涉及设计具有可证明保证的算法，这些算法在实际大模型部署中也具有实用性。",
        ),
        facts: &[(
            Localized::new("Active Projects", "进行中的项目"),
            Localized::new(
                "Robust LLM watermark detection based on Cauchy combinations",
                "基于柯西组合的稳健大模型水印识别",
            ),
        )],
    },
];

const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry { date: "2025-11-20", event: Localized::new("Thesis Proposal", "毕业论文开题"), status: "PASSED" },
    TimelineEntry {
        date: "2025-10-28",
        event: Localized::new("Paper accepted at STAT", "论文被 STAT 接收"),
        status: "SUCCESS",
    },
    TimelineEntry {
        date: "2025-09-25",
        event: Localized::new("Master\u{2019}s Program Accepted.", "完成保研流程"),
        status: "SUCCESS",
    },
];

const PAPERS: &[Paper] = &[Paper {
    title: "Adaptive Testing for Segmenting Watermarked Texts From Language Models",
    venue: "STAT",
    year: 2025,
    summary: "The rapid adoption of large language models (LLMs), such as GPT-4 and Claude 3.5, underscores the \
              need to distinguish LLM-generated text from human-written content to mitigate the spread of \
              misinformation and misuse in education. One promising approach to address this issue is the \
              watermark technique, which embeds subtle statistical signals into LLM-generated text to enable \
              reliable identification. In this paper, we first generalize the likelihood-based LLM detection \
              method of a previous study by introducing a flexible weighted formulation, and further adapt this \
              approach to the inverse transform sampling method. Moving beyond watermark detection, we extend \
              this adaptive detection strategy to tackle the more challenging problem of segmenting a given \
              text into watermarked and non-watermarked substrings. In contrast to the approach in a previous \
              study, which relies on accurate estimation of next-token probabilities that are highly sensitive \
              to prompt estimation, our proposed framework removes the need for precise prompt estimation. \
              Extensive numerical experiments demonstrate that the proposed methodology is both effective and \
              robust in accurately segmenting texts containing a mixture of watermarked and non-watermarked \
              content.",
    tags: &["LLM Security", "Watermark"],
    authors: &["Xingchi Li", "Xiaochi Liu", "Guanxun Li"],
    status: PaperStatus::Published,
    pdf_url: Some("https://arxiv.org/pdf/2511.06645"),
    source_url: Some("https://arxiv.org/abs/2511.06645"),
}];

const PROJECTS: &[Project] = &[
    Project {
        title: Localized::new("SOFT-Cauchy Watermark Detection", "水印识别 SOFT-Cauchy"),
        description: Localized::new(
            "An innovative watermark detection scheme that addresses the critical performance degradation of \
             watermark signals under adversarial attacks.",
            "一个创新的水印方案，解决当前水印信号在面临人为攻击时检验性能急剧下降的问题。",
        ),
        tech: &["PyTorch", "Soft Prompting", "Statistical Analysis"],
        status: ProjectStatus::InProgress,
        repo_url: Some("https://github.com/drafttim/llm-watermark-adaptive-cauthy-main"),
        demo_url: None,
        details: Some(ProjectDetails {
            problem: Localized::new(
                "Existing watermark detection systems suffer severe performance drops when facing adversarial \
                 attacks, as traditional methods struggle with output probability prediction and are \
                 vulnerable to localized manipulations.",
                "现有水印检测系统在面对对抗性攻击时性能严重下降，传统方法难以准确预测输出概率，且易受局部操纵攻击的影响。",
            ),
            solution: Localized::new(
                "Implemented soft prompt training approach to overcome output probability prediction \
                 challenges, combined with Cauchy combination strategy to defend against localized attacks.",
                "采用软提示词训练思路攻克输出概率预测难题，结合柯西组合策略有效防御局部攻击。",
            ),
            features: LocalizedList {
                en: &[
                    "Soft Prompt-Based Training",
                    "Cauchy Combination Defense",
                    "Robust Output Probability Prediction",
                    "Localized Attack Resistance",
                ],
                zh: &["基于软提示词的训练", "柯西组合防御机制", "鲁棒的输出概率预测", "局部攻击抵抗能力"],
            },
        }),
    },
    Project {
        title: Localized::new("CardioSentinel", "心鉴 CardioSentinel"),
        description: Localized::new(
            "An AI-powered system for early detection of chronic heart disease and personalized healthcare \
             guidance using multimodal deep learning and LLM fine-tuning.",
            "一套完整的系统，能够实现慢性心脏病的早期识别并针对患者个人情况提供个性化建议。",
        ),
        tech: &["PyTorch", "LoRA/QLoRA", "VAE", "DPO"],
        status: ProjectStatus::Complete,
        repo_url: None,
        demo_url: None,
        details: Some(ProjectDetails {
            problem: Localized::new(
                "Traditional cardiovascular diagnosis relies on manual interpretation of heterogeneous medical \
                 data (ECG, imaging, lab results), lacking early detection and personalized treatment \
                 recommendations. Existing AI models struggle to integrate multimodal data effectively.",
                "传统心血管疾病诊断依赖人工解读异构医疗数据（心电图、影像、生化指标），缺乏早期预警能力和个性化治疗建议。现有AI模型难以有效整合多模态数据。",
            ),
            solution: Localized::new(
                "Developed VAE-driven multimodal fusion model encoding cardiac data into unified latent space, \
                 achieving 1% accuracy improvement. Fine-tuned Llama-3.0-8B using LoRA/QLoRA with 8,851 \
                 GPT-4-generated, clinician-verified samples, applying DPO alignment and safety filtering.",
                "开发基于VAE的多模态融合模型将心脏数据编码到统一潜在空间，准确率提升1%。采用LoRA/QLoRA微调Llama-3.0-8B，使用8,851条GPT-4生成并经医生审核的样本，通过DPO对齐与安全过滤确保可靠性。",
            ),
            features: LocalizedList {
                en: &[
                    "VAE-Based Multimodal Fusion",
                    "Parameter-Efficient LLM Fine-Tuning (LoRA/QLoRA)",
                    "GPT-4 Knowledge Distillation",
                    "Direct Preference Optimization (DPO)",
                ],
                zh: &["基于VAE的多模态融合", "参数高效的大模型微调（LoRA/QLoRA）", "GPT-4知识蒸馏", "直接偏好优化（DPO）"],
            },
        }),
    },
];

const CONTACTS: &[ContactChannel] = &[
    ContactChannel {
        kind: ContactKind::Email,
        label: Localized::new("Mailbox", "电子邮箱"),
        value: "xiaochiliu@mail.bnu.edu.cn",
        href: None,
    },
    ContactChannel {
        kind: ContactKind::Repository,
        label: Localized::new("Code Repository", "代码仓库"),
        value: "github.com/drafttim",
        href: Some("https://github.com/drafttim"),
    },
];
