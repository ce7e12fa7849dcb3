use serde_json::{json, Value};

use super::generation_client::{GeminiClient, StructuredRequest};
use crate::models::{StudentAlert, StudentProfile, TrainerSummary, WorkoutFeedback, WorkoutSession};

/// Feedback for one workout session.
pub struct WorkoutFeedbackRequest<'a> {
    pub workout: &'a WorkoutSession,
}

impl StructuredRequest for WorkoutFeedbackRequest<'_> {
    type Output = WorkoutFeedback;

    const KIND: &'static str = "workout feedback";

    fn prompt(&self) -> String {
        let w = self.workout;
        format!(
            "Você é a BonaFit Personal, uma IA especialista em fitness para um app. \
             Analise os dados do treino de uma usuária e forneça feedback em Português (Brasil).\n\
             \n\
             Dados do Treino:\n\
             - Duração: {} minutos\n\
             - Distância: {} km\n\
             - Frequência Cardíaca Média: {} bpm\n\
             - Frequência Cardíaca Máxima: {} bpm\n\
             - Amostras de Frequência Cardíaca (minuto, bpm): {}\n",
            w.duration,
            w.distance,
            w.avg_heart_rate,
            w.max_heart_rate,
            w.samples_json()
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "heartRateAnalysis": {
                    "type": "STRING",
                    "description": "Análise das zonas de frequência cardíaca (ex: queima de gordura, cardio) e o tempo gasto em cada uma."
                },
                "distanceFeedback": {
                    "type": "STRING",
                    "description": "Feedback sobre a distância percorrida e o ritmo."
                },
                "overallMotivation": {
                    "type": "STRING",
                    "description": "Uma mensagem motivacional curta e encorajadora."
                },
                "nextWorkoutSuggestion": {
                    "type": "STRING",
                    "description": "Uma sugestão para o próximo treino ou uma dica de recuperação."
                }
            },
            "required": [
                "heartRateAnalysis",
                "distanceFeedback",
                "overallMotivation",
                "nextWorkoutSuggestion"
            ]
        })
    }

    fn fallback() -> WorkoutFeedback {
        WorkoutFeedback {
            heart_rate_analysis: "Você passou 12 minutos na zona de queima de gordura e 5 minutos na zona de cardio. Ótimo para resistência!".to_string(),
            distance_feedback: "Cobrir 5.2 km em 45 minutos é um ritmo excelente. Continue assim para melhorar sua velocidade.".to_string(),
            overall_motivation: "Você mostrou grande consistência e força hoje. Cada passo é uma vitória!".to_string(),
            next_workout_suggestion: "Seu batimento cardíaco se recuperou bem. Para o próximo treino, que tal tentar um percurso com mais inclinações para desafiar suas pernas?".to_string(),
        }
    }
}

/// Summary, alerts and a group challenge for the whole roster.
pub struct TrainerSummaryRequest<'a> {
    pub students: &'a [StudentProfile],
}

impl TrainerSummaryRequest<'_> {
    /// One line per student with count, total distance and mean heart rate.
    ///
    /// Totals cover each student's full workout history.
    pub fn roster_lines(&self) -> String {
        self.students
            .iter()
            .map(|student| {
                let stats = student.stats();
                format!(
                    "Aluna: {}, Total de treinos registrados: {}, Distância total: {:.1} km, Média de BPM: {}",
                    student.name,
                    stats.workout_count,
                    stats.total_distance_km,
                    stats.mean_heart_rate_label()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StructuredRequest for TrainerSummaryRequest<'_> {
    type Output = TrainerSummary;

    const KIND: &'static str = "trainer summary";

    fn prompt(&self) -> String {
        format!(
            "Você é um assistente de IA para uma personal trainer. \
             Analise o histórico de treinos das alunas e forneça insights em Português (Brasil).\n\
             \n\
             Dados das Alunas:\n\
             {}\n\
             \n\
             Com base nestes dados, forneça:\n\
             1. Um resumo geral do desempenho do grupo.\n\
             2. Alertas sobre quaisquer alunas que precisem de atenção (ex: queda de desempenho, risco de overtraining).\n\
             3. Uma sugestão criativa para um desafio semanal para engajar o grupo.\n",
            self.roster_lines()
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "overallSummary": {
                    "type": "STRING",
                    "description": "Um resumo geral e conciso do desempenho da turma."
                },
                "alerts": {
                    "type": "ARRAY",
                    "description": "Uma lista de alertas importantes sobre alunas específicas.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "studentName": { "type": "STRING" },
                            "alert": { "type": "STRING" }
                        },
                        "required": ["studentName", "alert"]
                    }
                },
                "challengeSuggestion": {
                    "type": "STRING",
                    "description": "Uma sugestão de desafio semanal para o grupo."
                }
            },
            "required": ["overallSummary", "alerts", "challengeSuggestion"]
        })
    }

    fn fallback() -> TrainerSummary {
        TrainerSummary {
            overall_summary: "A semana foi muito produtiva para suas alunas! Ana e Bia mostraram grande consistência. Carla teve uma pequena queda no volume, vale a pena verificar.".to_string(),
            alerts: vec![StudentAlert {
                student_name: "Carla".to_string(),
                alert: "Volume de treino diminuiu 30% esta semana.".to_string(),
            }],
            challenge_suggestion: "Que tal um desafio de 'Mais Tempo na Zona Cardio'? A aluna que passar mais tempo na zona de frequência cardíaca de cardio durante a semana ganha pontos.".to_string(),
        }
    }
}

/// Entry point for the two feedback call sites.
#[derive(Debug, Clone)]
pub struct FeedbackService {
    client: GeminiClient,
}

impl FeedbackService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub fn has_credential(&self) -> bool {
        self.client.has_credential()
    }

    /// `None` means the feedback is unavailable for this request.
    pub async fn workout_feedback(&self, workout: &WorkoutSession) -> Option<WorkoutFeedback> {
        self.client.generate(&WorkoutFeedbackRequest { workout }).await
    }

    pub async fn trainer_summary(&self, students: &[StudentProfile]) -> Option<TrainerSummary> {
        self.client.generate(&TrainerSummaryRequest { students }).await
    }
}
