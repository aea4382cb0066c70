//! SchoolSystem - 多租户学校管理平台后端
//!
//! 基于 SeaORM 构建的作业-提交-评分工作流核心库。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
