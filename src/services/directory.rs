//! 科目班级目录
//!
//! 学校、科目与班级的主数据由外部系统维护，本系统只持有
//! `subject_class_id` 外键。列表与详情需要展示头信息时通过该目录查询，
//! 查不到时头信息留空，不影响作业数据本身。

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::assignments::entities::SubjectClassHeader;

#[async_trait]
pub trait SubjectClassDirectory: Send + Sync {
    /// 查询科目班级头信息，未知 ID 返回 None
    async fn get_subject_class(&self, subject_class_id: i64) -> Result<Option<SubjectClassHeader>>;
}

/// 静态目录实现，用于测试与单体部署时的本地配置
#[derive(Debug, Default)]
pub struct StaticDirectory {
    entries: HashMap<i64, SubjectClassHeader>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, header: SubjectClassHeader) -> Self {
        self.entries.insert(header.id, header);
        self
    }
}

#[async_trait]
impl SubjectClassDirectory for StaticDirectory {
    async fn get_subject_class(&self, subject_class_id: i64) -> Result<Option<SubjectClassHeader>> {
        Ok(self.entries.get(&subject_class_id).cloned())
    }
}
