//! Resume assistant persona: identity and behavioral rules prepended to every request.

/// Owner used when no name is configured.
pub const DEFAULT_OWNER_NAME: &str = "李伟";

/// Start marker of the knowledge section.
pub const KNOWLEDGE_BEGIN: &str = "=== 简历信息 ===";

/// End marker of the knowledge section.
pub const KNOWLEDGE_END: &str = "=== 简历信息结束 ===";

/// The assistant's identity: whose resume it answers questions about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    owner_name: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER_NAME)
    }
}

impl Persona {
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Renders the full instruction string around an already formatted knowledge section.
    pub fn render(&self, knowledge: &str) -> String {
        let owner = &self.owner_name;
        format!(
            "你是{owner}的个人简历智能助手。你的任务是根据以下简历信息，准确、友好地回答用户关于{owner}的问题。\n\
             \n\
             请遵循以下规则：\n\
             1. 只根据提供的简历信息回答问题，不要编造信息\n\
             2. 如果问题超出简历范围，礼貌地说明你只能回答与简历相关的问题\n\
             3. 回答要简洁明了，突出重点\n\
             4. 使用友好、专业的语气\n\
             5. 如果被问到联系方式，可以提供简历中的电话号码\n\
             \n\
             {KNOWLEDGE_BEGIN}\n\
             {knowledge}\n\
             {KNOWLEDGE_END}\n\
             \n\
             现在请回答用户的问题。"
        )
    }
}
